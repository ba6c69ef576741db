//! The pack aggregate and whole-pack read/write.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use futures::future::try_join_all;
use mc_rs_resource_location::{ResourceLocation, ResourceMap, ToResourceLocation};
use tracing::{debug, info};

use crate::codec::{read_file, read_optional, to_json, write_file, Codec, CodecRegistry};
use crate::error::{PackError, Result};
use crate::fs::{LocalFs, PackFs};
use crate::meta::{check_description, LanguageInfo, PackMeta, TextComponent};
use crate::options::PackOptions;
use crate::resource::{AssetResource, DataResource, PackResource, PackType, ResourceKind};

const META_FILE: &str = "pack.mcmeta";
const ICON_FILE: &str = "pack.png";

pub type ResourcePack = Pack<AssetResource>;
pub type DataPack = Pack<DataResource>;

/// A resource pack or data pack: metadata plus one [`ResourceMap`] per
/// resource category of `R`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pack<R: PackResource> {
    description: TextComponent,
    icon: Option<Vec<u8>>,
    languages: BTreeMap<String, LanguageInfo>,
    resources: Vec<ResourceMap<R>>,
}

impl<R: PackResource> Default for Pack<R> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<R: PackResource> Pack<R> {
    pub fn new(description: impl Into<TextComponent>) -> Self {
        Self {
            description: description.into(),
            icon: None,
            languages: BTreeMap::new(),
            resources: R::Kind::ALL.iter().map(|_| ResourceMap::new()).collect(),
        }
    }

    /// Read a pack from disk with the standard codecs and options.
    pub async fn read(dir: impl AsRef<Path>) -> Result<Self> {
        PackIo::local().read(dir).await
    }

    /// Replace the contents of `dir` with this pack.
    pub async fn write(&self, dir: impl AsRef<Path>) -> Result<()> {
        PackIo::local().write(self, dir).await
    }

    /// Like [`Pack::write`], calling `on_written` once for every resource
    /// after its category has been written.
    pub async fn write_with<F>(&self, dir: impl AsRef<Path>, on_written: F) -> Result<()>
    where
        F: Fn(R::Kind, &ResourceLocation) + Sync,
    {
        PackIo::local().write_with(self, dir, on_written).await
    }

    pub fn pack_type(&self) -> PackType {
        R::PACK_TYPE
    }

    pub fn description(&self) -> &TextComponent {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<TextComponent>) {
        self.description = description.into();
    }

    pub fn icon(&self) -> Option<&[u8]> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<Vec<u8>>) {
        self.icon = icon;
    }

    /// Languages declared in `pack.mcmeta`, keyed by language code.
    pub fn languages(&self) -> &BTreeMap<String, LanguageInfo> {
        &self.languages
    }

    pub fn languages_mut(&mut self) -> &mut BTreeMap<String, LanguageInfo> {
        &mut self.languages
    }

    pub fn resources(&self, kind: R::Kind) -> &ResourceMap<R> {
        &self.resources[kind.index()]
    }

    /// Direct access to one category. Values inserted here must be of
    /// `kind`, or writing the pack fails with a codec mismatch.
    pub fn resources_mut(&mut self, kind: R::Kind) -> &mut ResourceMap<R> {
        &mut self.resources[kind.index()]
    }

    pub fn get_resource<K>(&self, kind: R::Kind, id: &K) -> Option<&R>
    where
        K: ToResourceLocation + ?Sized,
    {
        self.resources(kind).get(id)
    }

    /// Store `resource` under `id` in its own category, returning the value
    /// it replaced.
    pub fn add_resource(&mut self, id: ResourceLocation, resource: R) -> Option<R> {
        self.resources_mut(resource.kind()).insert(id, resource)
    }

    pub fn delete_resource<K>(&mut self, kind: R::Kind, id: &K) -> Option<R>
    where
        K: ToResourceLocation + ?Sized,
    {
        self.resources_mut(kind).remove(id)
    }

    /// Number of resources across all categories.
    pub fn len(&self) -> usize {
        self.resources.iter().map(ResourceMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.iter().all(ResourceMap::is_empty)
    }

    /// Every resource, category by category in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (R::Kind, &ResourceLocation, &R)> + '_ {
        R::Kind::ALL
            .iter()
            .zip(&self.resources)
            .flat_map(|(&kind, map)| map.iter().map(move |(id, resource)| (kind, id, resource)))
    }
}

/// The filesystem, codecs and options used to read and write packs of `R`.
pub struct PackIo<R: PackResource> {
    fs: Arc<dyn PackFs>,
    codecs: CodecRegistry<R>,
    options: PackOptions,
}

impl<R: PackResource> fmt::Debug for PackIo<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackIo")
            .field("codecs", &self.codecs)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R: PackResource> PackIo<R> {
    pub fn new(fs: Arc<dyn PackFs>, codecs: CodecRegistry<R>) -> Self {
        Self {
            fs,
            codecs,
            options: PackOptions::default(),
        }
    }

    /// The local filesystem with the standard codecs.
    pub fn local() -> Self {
        Self::new(Arc::new(LocalFs), R::codecs())
    }

    pub fn with_options(mut self, options: PackOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    pub fn codecs(&self) -> &CodecRegistry<R> {
        &self.codecs
    }

    /// Look up the codec of every kind in `kinds` before any I/O happens.
    fn codecs_for(
        &self,
        kinds: impl Iterator<Item = R::Kind>,
    ) -> Result<Vec<(R::Kind, &dyn Codec<R>)>> {
        kinds
            .map(|kind| Ok((kind, self.codecs.get(kind)?)))
            .collect()
    }

    pub async fn read(&self, dir: impl AsRef<Path>) -> Result<Pack<R>> {
        let root = dir.as_ref();
        let fs = self.fs.as_ref();

        let meta_path = root.join(META_FILE);
        let meta = PackMeta::parse(&meta_path, &read_file(fs, &meta_path).await?, &self.options)?;
        let icon = read_optional(fs, &root.join(ICON_FILE)).await?;
        let codecs = self.codecs_for(R::Kind::ALL.iter().copied())?;

        let mut pack = Pack::new(meta.description);
        pack.icon = icon;
        pack.languages = meta.languages;

        let dir = root.join(R::PACK_TYPE.directory());
        let dir = dir.as_path();
        let reads = codecs.into_iter().map(|(kind, codec)| async move {
            let entries = codec.read(fs, dir).await?;
            debug!("Read {} {kind} resources from {}", entries.len(), dir.display());
            Ok::<_, PackError>(entries)
        });
        for entries in try_join_all(reads).await? {
            for (id, resource) in entries {
                pack.add_resource(id, resource);
            }
        }

        info!(
            "Read {} pack from {} ({} resources)",
            R::PACK_TYPE,
            root.display(),
            pack.len()
        );
        Ok(pack)
    }

    /// Replace the contents of `dir` with `pack`.
    ///
    /// Everything already in `dir` is deleted first.
    pub async fn write(&self, pack: &Pack<R>, dir: impl AsRef<Path>) -> Result<()> {
        self.write_with(pack, dir, |_, _| {}).await
    }

    /// Like [`PackIo::write`], reporting every resource to `on_written` once
    /// its category is on disk. Categories finish in no particular order.
    pub async fn write_with<F>(
        &self,
        pack: &Pack<R>,
        dir: impl AsRef<Path>,
        on_written: F,
    ) -> Result<()>
    where
        F: Fn(R::Kind, &ResourceLocation) + Sync,
    {
        let root = dir.as_ref();
        let fs = self.fs.as_ref();
        check_description(&pack.description)?;
        let codecs = self.codecs_for(
            R::Kind::ALL
                .iter()
                .copied()
                .filter(|&kind| !pack.resources(kind).is_empty()),
        )?;

        fs.empty_dir(root)
            .await
            .map_err(|e| PackError::io(root, e))?;

        let meta = PackMeta {
            description: pack.description.clone(),
            pack_format: i64::from(self.options.pack_format),
            languages: pack.languages.clone(),
        };
        let meta_path = root.join(META_FILE);
        write_file(fs, &meta_path, &to_json(&meta_path, &meta.to_json())?).await?;
        if let Some(icon) = &pack.icon {
            write_file(fs, &root.join(ICON_FILE), icon).await?;
        }

        let dir = root.join(R::PACK_TYPE.directory());
        let dir = dir.as_path();
        let on_written = &on_written;
        let writes = codecs.into_iter().map(|(kind, codec)| async move {
            let resources = pack.resources(kind);
            codec.write_all(fs, dir, resources).await?;
            for id in resources.keys() {
                on_written(kind, id);
            }
            debug!("Wrote {} {kind} resources to {}", resources.len(), dir.display());
            Ok::<_, PackError>(())
        });
        try_join_all(writes).await?;

        info!(
            "Wrote {} pack to {} ({} resources)",
            R::PACK_TYPE,
            root.display(),
            pack.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;
    use crate::resource::{
        Animation, AnimationFrames, AssetType, DataType, Language, SoundEvent, Tag, TagEntry,
        Texture, TextureMetadata, TextureSection,
    };
    use serde_json::json;
    use std::path::PathBuf;

    fn loc(s: &str) -> ResourceLocation {
        s.parse().unwrap()
    }

    fn memory_io<R: PackResource>() -> (Arc<MemoryFs>, PackIo<R>) {
        let fs = Arc::new(MemoryFs::new());
        let io = PackIo::new(fs.clone(), R::codecs());
        (fs, io)
    }

    fn function(lines: &[&str]) -> DataResource {
        DataResource::Function(lines.iter().map(|line| line.to_string()).collect())
    }

    #[tokio::test]
    async fn function_pack_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");

        let mut pack = DataPack::new("Test datapack.");
        pack.add_resource(loc("namespace:test"), function(&["say 1", "say 2"]));
        pack.write(&out).await.unwrap();

        let written = std::fs::read_to_string(out.join("data/namespace/functions/test.mcfunction"))
            .unwrap();
        assert_eq!(written, "say 1\nsay 2\n");
        let meta: serde_json::Value =
            serde_json::from_slice(&std::fs::read(out.join("pack.mcmeta")).unwrap()).unwrap();
        assert_eq!(
            meta,
            json!({ "pack": { "description": "Test datapack.", "pack_format": 5 } })
        );
        assert!(!out.join("pack.png").exists());

        let read = DataPack::read(&out).await.unwrap();
        assert_eq!(read, pack);
        assert_eq!(read.description(), &json!("Test datapack."));
        assert_eq!(
            read.get_resource(DataType::Function, "namespace:test"),
            Some(&function(&["say 1", "say 2"]))
        );
    }

    #[tokio::test]
    async fn write_replaces_directory_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        std::fs::create_dir_all(out.join("data/old/functions")).unwrap();
        std::fs::write(out.join("data/old/functions/stale.mcfunction"), "say old").unwrap();
        std::fs::write(out.join("notes.txt"), "unrelated").unwrap();

        DataPack::new("fresh").write(&out).await.unwrap();

        let mut names: Vec<_> = std::fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        names.sort();
        assert_eq!(names, ["pack.mcmeta"]);
    }

    #[tokio::test]
    async fn tag_values_keep_hash_marker() {
        let (fs, io) = memory_io::<DataResource>();
        let mut pack = DataPack::new("tags");
        let doors = DataResource::Tag(Tag::new(vec![
            TagEntry::element(loc("minecraft:iron_door")),
            TagEntry::tag(loc("minecraft:wooden_doors")),
        ]));
        pack.add_resource(loc("test:blocks/doors"), doors.clone());
        io.write(&pack, "pack").await.unwrap();

        let bytes = fs
            .read(Path::new("pack/data/test/tags/blocks/doors.json"))
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            json!({ "values": ["minecraft:iron_door", "#minecraft:wooden_doors"] })
        );

        let read = io.read("pack").await.unwrap();
        assert_eq!(read.get_resource(DataType::Tag, "test:blocks/doors"), Some(&doors));
    }

    #[tokio::test]
    async fn data_pack_round_trip() {
        let (fs, io) = memory_io::<DataResource>();
        let mut pack = DataPack::new(json!({ "text": "Everything", "color": "green" }));
        pack.set_icon(Some(vec![0x89, b'P', b'N', b'G']));
        let value = |name: &str| json!({ "name": name, "nested": { "list": [1, 2, 3] } });
        let resources = [
            ("test:story/root", DataResource::Advancement(value("advancement"))),
            ("test:tick", function(&["say tick", "", "function test:other"])),
            ("test:blocks/stone", DataResource::LootTable(value("loot"))),
            ("test:is_day", DataResource::Predicate(value("predicate"))),
            ("test:planks", DataResource::Recipe(value("recipe"))),
            ("test:house", DataResource::Structure(b"\x0a\x00\x00\x00".to_vec())),
            (
                "minecraft:functions/tick",
                DataResource::Tag(Tag::new(vec![
                    TagEntry::element(loc("test:tick")).required(true)
                ])),
            ),
            ("test:cold", DataResource::DimensionType(value("dimension_type"))),
            ("test:frozen", DataResource::Dimension(value("dimension"))),
            ("test:tundra", DataResource::Biome(value("biome"))),
            ("test:ice_spike", DataResource::ConfiguredFeature(value("feature"))),
            ("test:igloo", DataResource::ConfiguredStructureFeature(value("structure"))),
            ("test:snowy", DataResource::ConfiguredSurfaceBuilder(value("surface"))),
            ("test:frozen_noise", DataResource::NoiseSettings(value("noise"))),
            ("test:weathered", DataResource::ProcessorList(value("processor"))),
            ("test:village/start", DataResource::TemplatePool(value("pool"))),
        ];
        for (id, resource) in resources {
            assert!(pack.add_resource(loc(id), resource).is_none());
        }
        assert_eq!(pack.len(), DataType::ALL.len());
        for &kind in DataType::ALL {
            assert_eq!(pack.resources(kind).len(), 1, "{kind}");
        }

        io.write(&pack, "out").await.unwrap();
        assert!(fs
            .paths()
            .contains(&PathBuf::from("out/data/test/worldgen/template_pool/village/start.json")));
        assert!(fs
            .paths()
            .contains(&PathBuf::from("out/data/test/structures/house.nbt")));

        let read = io.read("out").await.unwrap();
        assert_eq!(read, pack);
        assert_eq!(read.icon(), Some(&[0x89, b'P', b'N', b'G'][..]));
    }

    #[tokio::test]
    async fn resource_pack_round_trip() {
        let (fs, io) = memory_io::<AssetResource>();
        let mut pack = ResourcePack::new("Assets");
        pack.languages_mut().insert(
            "tlh_aa".to_string(),
            LanguageInfo {
                region: "Kling".to_string(),
                name: "tlhIngan Hol".to_string(),
                bidirectional: None,
            },
        );
        let animated = Texture::new(vec![1, 2, 3]).with_metadata(TextureMetadata {
            animation: Some(Animation {
                frames: AnimationFrames::Sequential { frametime: 4 },
                ..Animation::default()
            }),
            texture: Some(TextureSection {
                blur: false,
                clamp: true,
            }),
            ..TextureMetadata::default()
        });
        let mut language = Language::new();
        language.insert("block.test.thing".to_string(), "Thing".to_string());
        let json = |name: &str| json!({ "name": name });
        let resources = [
            ("test:block/thing", AssetResource::Texture(animated)),
            ("test:block/plain", AssetResource::Texture(Texture::new(vec![4, 5]))),
            ("test:thing", AssetResource::Blockstate(json("blockstate"))),
            ("test:block/thing", AssetResource::Model(json("model"))),
            ("test:thing/hit", AssetResource::Sound(vec![b'O', b'g', b'g', b'S'])),
            (
                "test:thing.hit",
                AssetResource::SoundEvent(SoundEvent {
                    sounds: Some(vec![json!("test:thing/hit")]),
                    replace: Some(true),
                    subtitle: None,
                }),
            ),
            ("test:en_us", AssetResource::Language(language)),
            ("test:credits", AssetResource::Text("Made by\r\nsomeone".to_string())),
            ("test:default", AssetResource::Font(json("font"))),
            ("test:glyph_sizes.bin", AssetResource::GlyphSizes(vec![0x11; 8])),
            ("test:mono/regular.ttf", AssetResource::TrueTypeFont(vec![0, 1, 0, 0])),
            ("test:blur", AssetResource::VertexShader("#version 110\n".to_string())),
            (
                "test:blur",
                AssetResource::FragmentShader("#version 110\nvoid main() {}\n".to_string()),
            ),
            ("test:blur", AssetResource::ShaderProgram(json("program"))),
            ("test:blur", AssetResource::PostEffect(json("post"))),
            ("test:gpu_warnlist", AssetResource::GpuWarnlist(json!({ "renderer": [] }))),
        ];
        for (id, resource) in resources {
            assert!(pack.add_resource(loc(id), resource).is_none());
        }
        for &kind in AssetType::ALL {
            assert!(!pack.resources(kind).is_empty(), "{kind}");
        }

        io.write(&pack, "rp").await.unwrap();
        let paths = fs.paths();
        for expected in [
            "rp/pack.mcmeta",
            "rp/assets/test/textures/block/thing.png",
            "rp/assets/test/textures/block/thing.png.mcmeta",
            "rp/assets/test/textures/block/plain.png",
            "rp/assets/test/sounds.json",
            "rp/assets/test/font/glyph_sizes.bin",
            "rp/assets/test/font/mono/regular.ttf",
            "rp/assets/test/shaders/program/blur.vsh",
            "rp/assets/test/shaders/program/blur.fsh",
            "rp/assets/test/shaders/program/blur.json",
            "rp/assets/test/shaders/post/blur.json",
            "rp/assets/test/gpu_warnlist.json",
        ] {
            assert!(paths.contains(&PathBuf::from(expected)), "{expected}");
        }
        assert!(!paths.contains(&PathBuf::from("rp/assets/test/textures/block/plain.png.mcmeta")));
        assert!(!paths.contains(&PathBuf::from("rp/pack.png")));

        let read = io.read("rp").await.unwrap();
        assert_eq!(read, pack);
        assert_eq!(read.icon(), None);
        assert_eq!(read.languages().len(), 1);
    }

    #[tokio::test]
    async fn unregistered_codec_fails_fast() {
        let fs = Arc::new(MemoryFs::new());
        let io = PackIo::new(fs.clone(), DataResource::codecs().without(DataType::Function));

        let mut pack = DataPack::new("x");
        io.write(&pack, "out").await.unwrap();
        assert!(matches!(
            io.read("out").await,
            Err(PackError::UnregisteredType(name)) if name == "function"
        ));

        pack.add_resource(loc("a:b"), function(&["say hi"]));
        fs.empty_dir(Path::new("out")).await.unwrap();
        assert!(matches!(
            io.write(&pack, "out").await,
            Err(PackError::UnregisteredType(_))
        ));
        assert!(fs.paths().is_empty());
    }

    #[tokio::test]
    async fn missing_or_invalid_meta() {
        let (fs, io) = memory_io::<DataResource>();
        assert!(io.read("nowhere").await.unwrap_err().is_not_found());

        fs.write(
            Path::new("bad/pack.mcmeta"),
            br#"{ "pack": { "description": "x", "pack_format": 99 } }"#,
        )
        .await
        .unwrap();
        assert!(matches!(
            io.read("bad").await,
            Err(PackError::PackFormatMismatch { got: 99, .. })
        ));

        let lenient = PackIo::new(fs.clone(), DataResource::codecs())
            .with_options(PackOptions::lenient());
        let pack = lenient.read("bad").await.unwrap();
        assert!(pack.is_empty());
    }

    #[tokio::test]
    async fn written_format_follows_options() {
        let fs = Arc::new(MemoryFs::new());
        let options = PackOptions {
            pack_format: 7,
            check_format: true,
        };
        let io = PackIo::new(fs.clone(), DataResource::codecs()).with_options(options);
        io.write(&DataPack::default(), "p").await.unwrap();
        let meta: serde_json::Value =
            serde_json::from_slice(&fs.read(Path::new("p/pack.mcmeta")).await.unwrap()).unwrap();
        assert_eq!(meta["pack"]["pack_format"], 7);
        assert_eq!(meta["pack"]["description"], "");
        assert!(io.read("p").await.is_ok());
    }

    #[tokio::test]
    async fn every_written_resource_is_reported_once() {
        let (_fs, io) = memory_io::<DataResource>();
        let mut pack = DataPack::new("progress");
        pack.add_resource(loc("a:one"), function(&["say 1"]));
        pack.add_resource(loc("a:two"), function(&["say 2"]));
        pack.add_resource(loc("a:planks"), DataResource::Recipe(json!({ "type": "crafting" })));
        pack.add_resource(loc("b:logs"), DataResource::Tag(Tag::default()));

        let reported = std::sync::Mutex::new(Vec::new());
        io.write_with(&pack, "out", |kind, id| {
            reported.lock().unwrap().push((kind, id.to_string()));
        })
        .await
        .unwrap();

        let mut reported = reported.into_inner().unwrap();
        reported.sort();
        assert_eq!(
            reported,
            [
                (DataType::Function, "a:one".to_string()),
                (DataType::Function, "a:two".to_string()),
                (DataType::Recipe, "a:planks".to_string()),
                (DataType::Tag, "b:logs".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn rejected_pack_reports_nothing() {
        let (fs, io) = memory_io::<DataResource>();
        let mut pack = DataPack::new(serde_json::Value::Null);
        pack.add_resource(loc("a:one"), function(&["say 1"]));

        let calls = std::sync::atomic::AtomicUsize::new(0);
        let err = io
            .write_with(&pack, "out", |_, _| {
                calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PackError::InvalidDescription(_)));
        assert_eq!(calls.into_inner(), 0);
        assert!(fs.paths().is_empty());
    }

    #[tokio::test]
    async fn description_must_be_a_text_component() {
        let (fs, io) = memory_io::<DataResource>();
        for description in [json!(3), json!(true), serde_json::Value::Null] {
            let pack = DataPack::new(description);
            assert!(matches!(
                io.write(&pack, "out").await,
                Err(PackError::InvalidDescription(_))
            ));
        }
        assert!(fs.paths().is_empty());

        let mut pack = DataPack::new("ok");
        pack.set_description(json!(["a", { "text": "b" }]));
        io.write(&pack, "out").await.unwrap();
        assert_eq!(io.read("out").await.unwrap(), pack);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn dangling_symlinks_do_not_hide_resources() {
        use std::os::unix::fs::symlink;

        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let mut pack = DataPack::new("links");
        pack.add_resource(loc("ns:one"), function(&["say 1"]));
        pack.add_resource(loc("ns:two"), function(&["say 2"]));
        pack.write(&out).await.unwrap();

        symlink(tmp.path().join("missing"), out.join("data/dangling")).unwrap();
        let read = DataPack::read(&out).await.unwrap();
        assert_eq!(read.len(), 2);

        symlink(
            tmp.path().join("missing"),
            out.join("data/ns/functions/broken.mcfunction"),
        )
        .unwrap();
        let err = DataPack::read(&out).await.unwrap_err();
        assert!(matches!(err, PackError::Io { .. }), "{err}");
    }

    #[test]
    fn accessors() {
        let mut pack = DataPack::default();
        assert_eq!(pack.pack_type(), PackType::Data);
        assert!(pack.is_empty());

        assert_eq!(pack.add_resource(loc("a:x"), function(&["say 1"])), None);
        assert_eq!(pack.add_resource(loc("a:y"), function(&["say 2"])), None);
        assert_eq!(
            pack.add_resource(loc("a:x"), function(&["say 3"])),
            Some(function(&["say 1"]))
        );
        let ids: Vec<_> = pack.iter().map(|(_, id, _)| id.to_string()).collect();
        assert_eq!(ids, ["a:x", "a:y"]);
        assert_eq!(pack.len(), 2);

        assert!(pack.get_resource(DataType::Function, "a:x").is_some());
        assert!(pack.get_resource(DataType::Recipe, "a:x").is_none());
        assert!(pack.get_resource(DataType::Function, "Not Valid").is_none());

        assert_eq!(
            pack.delete_resource(DataType::Function, "a:x"),
            Some(function(&["say 3"]))
        );
        assert_eq!(pack.delete_resource(DataType::Function, "a:x"), None);
        assert_eq!(pack.len(), 1);

        pack.set_description(json!({ "text": "rich" }));
        assert_eq!(pack.description(), &json!({ "text": "rich" }));
    }
}
