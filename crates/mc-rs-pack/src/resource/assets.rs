//! Resource pack (`assets`) variants.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PackResource, PackType, ResourceKind, SoundEvent, Texture};
use crate::codec::{
    variant, BinaryCodec, CodecRegistry, JsonCodec, NamespaceFileCodec, SoundEventsCodec,
    TextCodec, TextureCodec,
};
use crate::discovery::Filter;

/// Translation keys of one `lang/<code>.json` file.
pub type Language = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Texture,
    Blockstate,
    Model,
    Sound,
    SoundEvent,
    Language,
    Text,
    Font,
    GlyphSizes,
    TrueTypeFont,
    VertexShader,
    FragmentShader,
    ShaderProgram,
    PostEffect,
    GpuWarnlist,
}

impl ResourceKind for AssetType {
    const ALL: &'static [Self] = &[
        Self::Texture,
        Self::Blockstate,
        Self::Model,
        Self::Sound,
        Self::SoundEvent,
        Self::Language,
        Self::Text,
        Self::Font,
        Self::GlyphSizes,
        Self::TrueTypeFont,
        Self::VertexShader,
        Self::FragmentShader,
        Self::ShaderProgram,
        Self::PostEffect,
        Self::GpuWarnlist,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::Blockstate => "blockstate",
            Self::Model => "model",
            Self::Sound => "sound",
            Self::SoundEvent => "sound_event",
            Self::Language => "language",
            Self::Text => "text",
            Self::Font => "font",
            Self::GlyphSizes => "glyph_sizes",
            Self::TrueTypeFont => "true_type_font",
            Self::VertexShader => "vertex_shader",
            Self::FragmentShader => "fragment_shader",
            Self::ShaderProgram => "shader_program",
            Self::PostEffect => "post_effect",
            Self::GpuWarnlist => "gpu_warnlist",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resource that lives under `assets/`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetResource {
    Texture(Texture),
    Blockstate(Value),
    Model(Value),
    /// Ogg Vorbis audio.
    Sound(Vec<u8>),
    SoundEvent(SoundEvent),
    Language(Language),
    Text(String),
    Font(Value),
    GlyphSizes(Vec<u8>),
    TrueTypeFont(Vec<u8>),
    VertexShader(String),
    FragmentShader(String),
    ShaderProgram(Value),
    PostEffect(Value),
    GpuWarnlist(Value),
}

fn is_glyph_sizes(path: &str) -> bool {
    path.ends_with(".bin")
}

fn is_true_type(path: &str) -> bool {
    path.ends_with(".ttf")
}

impl PackResource for AssetResource {
    type Kind = AssetType;

    const PACK_TYPE: PackType = PackType::Assets;

    fn kind(&self) -> AssetType {
        match self {
            Self::Texture(_) => AssetType::Texture,
            Self::Blockstate(_) => AssetType::Blockstate,
            Self::Model(_) => AssetType::Model,
            Self::Sound(_) => AssetType::Sound,
            Self::SoundEvent(_) => AssetType::SoundEvent,
            Self::Language(_) => AssetType::Language,
            Self::Text(_) => AssetType::Text,
            Self::Font(_) => AssetType::Font,
            Self::GlyphSizes(_) => AssetType::GlyphSizes,
            Self::TrueTypeFont(_) => AssetType::TrueTypeFont,
            Self::VertexShader(_) => AssetType::VertexShader,
            Self::FragmentShader(_) => AssetType::FragmentShader,
            Self::ShaderProgram(_) => AssetType::ShaderProgram,
            Self::PostEffect(_) => AssetType::PostEffect,
            Self::GpuWarnlist(_) => AssetType::GpuWarnlist,
        }
    }

    fn codecs() -> CodecRegistry<Self> {
        use AssetType as T;

        CodecRegistry::new()
            .with(T::Texture, TextureCodec::new(variant!(AssetResource::Texture)))
            .with(T::Blockstate, JsonCodec::new("blockstates", variant!(AssetResource::Blockstate)))
            .with(T::Model, JsonCodec::new("models", variant!(AssetResource::Model)))
            .with(
                T::Sound,
                BinaryCodec::new(
                    "sounds",
                    Filter::Extension(".ogg"),
                    variant!(AssetResource::Sound),
                ),
            )
            .with(T::SoundEvent, SoundEventsCodec::new(variant!(AssetResource::SoundEvent)))
            .with(T::Language, JsonCodec::new("lang", variant!(AssetResource::Language)))
            .with(
                T::Text,
                TextCodec::new("texts", Filter::Extension(".txt"), variant!(AssetResource::Text)),
            )
            .with(T::Font, JsonCodec::new("font", variant!(AssetResource::Font)))
            .with(
                T::GlyphSizes,
                BinaryCodec::new(
                    "font",
                    Filter::Matching(is_glyph_sizes),
                    variant!(AssetResource::GlyphSizes),
                ),
            )
            .with(
                T::TrueTypeFont,
                BinaryCodec::new(
                    "font",
                    Filter::Matching(is_true_type),
                    variant!(AssetResource::TrueTypeFont),
                ),
            )
            .with(
                T::VertexShader,
                TextCodec::new(
                    "shaders/program",
                    Filter::Extension(".vsh"),
                    variant!(AssetResource::VertexShader),
                ),
            )
            .with(
                T::FragmentShader,
                TextCodec::new(
                    "shaders/program",
                    Filter::Extension(".fsh"),
                    variant!(AssetResource::FragmentShader),
                ),
            )
            .with(
                T::ShaderProgram,
                JsonCodec::new("shaders/program", variant!(AssetResource::ShaderProgram)),
            )
            .with(
                T::PostEffect,
                JsonCodec::new("shaders/post", variant!(AssetResource::PostEffect)),
            )
            .with(
                T::GpuWarnlist,
                NamespaceFileCodec::new("gpu_warnlist", variant!(AssetResource::GpuWarnlist)),
            )
    }
}
