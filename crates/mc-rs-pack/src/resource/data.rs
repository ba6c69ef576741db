//! Data pack (`data`) variants.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PackResource, PackType, ResourceKind, Tag};
use crate::codec::{variant, BinaryCodec, CodecRegistry, JsonCodec, LinesCodec};
use crate::discovery::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Advancement,
    Function,
    LootTable,
    Predicate,
    Recipe,
    Structure,
    Tag,
    DimensionType,
    Dimension,
    Biome,
    ConfiguredFeature,
    ConfiguredStructureFeature,
    ConfiguredSurfaceBuilder,
    NoiseSettings,
    ProcessorList,
    TemplatePool,
}

impl ResourceKind for DataType {
    const ALL: &'static [Self] = &[
        Self::Advancement,
        Self::Function,
        Self::LootTable,
        Self::Predicate,
        Self::Recipe,
        Self::Structure,
        Self::Tag,
        Self::DimensionType,
        Self::Dimension,
        Self::Biome,
        Self::ConfiguredFeature,
        Self::ConfiguredStructureFeature,
        Self::ConfiguredSurfaceBuilder,
        Self::NoiseSettings,
        Self::ProcessorList,
        Self::TemplatePool,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Advancement => "advancement",
            Self::Function => "function",
            Self::LootTable => "loot_table",
            Self::Predicate => "predicate",
            Self::Recipe => "recipe",
            Self::Structure => "structure",
            Self::Tag => "tag",
            Self::DimensionType => "dimension_type",
            Self::Dimension => "dimension",
            Self::Biome => "biome",
            Self::ConfiguredFeature => "configured_feature",
            Self::ConfiguredStructureFeature => "configured_structure_feature",
            Self::ConfiguredSurfaceBuilder => "configured_surface_builder",
            Self::NoiseSettings => "noise_settings",
            Self::ProcessorList => "processor_list",
            Self::TemplatePool => "template_pool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resource that lives under `data/`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataResource {
    Advancement(Value),
    /// One command per line.
    Function(Vec<String>),
    LootTable(Value),
    Predicate(Value),
    Recipe(Value),
    /// Uncompressed NBT; gzipped on disk.
    Structure(Vec<u8>),
    Tag(Tag),
    DimensionType(Value),
    Dimension(Value),
    Biome(Value),
    ConfiguredFeature(Value),
    ConfiguredStructureFeature(Value),
    ConfiguredSurfaceBuilder(Value),
    NoiseSettings(Value),
    ProcessorList(Value),
    TemplatePool(Value),
}

impl PackResource for DataResource {
    type Kind = DataType;

    const PACK_TYPE: PackType = PackType::Data;

    fn kind(&self) -> DataType {
        match self {
            Self::Advancement(_) => DataType::Advancement,
            Self::Function(_) => DataType::Function,
            Self::LootTable(_) => DataType::LootTable,
            Self::Predicate(_) => DataType::Predicate,
            Self::Recipe(_) => DataType::Recipe,
            Self::Structure(_) => DataType::Structure,
            Self::Tag(_) => DataType::Tag,
            Self::DimensionType(_) => DataType::DimensionType,
            Self::Dimension(_) => DataType::Dimension,
            Self::Biome(_) => DataType::Biome,
            Self::ConfiguredFeature(_) => DataType::ConfiguredFeature,
            Self::ConfiguredStructureFeature(_) => DataType::ConfiguredStructureFeature,
            Self::ConfiguredSurfaceBuilder(_) => DataType::ConfiguredSurfaceBuilder,
            Self::NoiseSettings(_) => DataType::NoiseSettings,
            Self::ProcessorList(_) => DataType::ProcessorList,
            Self::TemplatePool(_) => DataType::TemplatePool,
        }
    }

    fn codecs() -> CodecRegistry<Self> {
        use DataType as T;

        CodecRegistry::new()
            .with(
                T::Advancement,
                JsonCodec::new("advancements", variant!(DataResource::Advancement)),
            )
            .with(
                T::Function,
                LinesCodec::new("functions", ".mcfunction", variant!(DataResource::Function)),
            )
            .with(T::LootTable, JsonCodec::new("loot_tables", variant!(DataResource::LootTable)))
            .with(T::Predicate, JsonCodec::new("predicates", variant!(DataResource::Predicate)))
            .with(T::Recipe, JsonCodec::new("recipes", variant!(DataResource::Recipe)))
            .with(
                T::Structure,
                BinaryCodec::new(
                    "structures",
                    Filter::Extension(".nbt"),
                    variant!(DataResource::Structure),
                )
                .gzip(),
            )
            .with(T::Tag, JsonCodec::new("tags", variant!(DataResource::Tag)))
            .with(
                T::DimensionType,
                JsonCodec::new("dimension_type", variant!(DataResource::DimensionType)),
            )
            .with(T::Dimension, JsonCodec::new("dimension", variant!(DataResource::Dimension)))
            .with(T::Biome, JsonCodec::new("worldgen/biome", variant!(DataResource::Biome)))
            .with(
                T::ConfiguredFeature,
                JsonCodec::new(
                    "worldgen/configured_feature",
                    variant!(DataResource::ConfiguredFeature),
                ),
            )
            .with(
                T::ConfiguredStructureFeature,
                JsonCodec::new(
                    "worldgen/configured_structure_feature",
                    variant!(DataResource::ConfiguredStructureFeature),
                ),
            )
            .with(
                T::ConfiguredSurfaceBuilder,
                JsonCodec::new(
                    "worldgen/configured_surface_builder",
                    variant!(DataResource::ConfiguredSurfaceBuilder),
                ),
            )
            .with(
                T::NoiseSettings,
                JsonCodec::new("worldgen/noise_settings", variant!(DataResource::NoiseSettings)),
            )
            .with(
                T::ProcessorList,
                JsonCodec::new("worldgen/processor_list", variant!(DataResource::ProcessorList)),
            )
            .with(
                T::TemplatePool,
                JsonCodec::new("worldgen/template_pool", variant!(DataResource::TemplatePool)),
            )
    }
}
