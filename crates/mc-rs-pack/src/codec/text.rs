//! Plain text files: whole-file text and line lists.

use std::path::Path;

use async_trait::async_trait;
use mc_rs_resource_location::ResourceLocation;

use super::{decode_utf8, read_each, write_file, Codec, Variant};
use crate::discovery::Filter;
use crate::error::Result;
use crate::fs::PackFs;
use crate::resource::PackResource;

/// Split file contents into lines.
///
/// Both `\n` and `\r\n` end a line, and a final line terminator does not
/// produce an extra empty line.
pub fn parse_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Each line followed by `\n`.
pub fn join_lines(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// UTF-8 text stored verbatim.
pub struct TextCodec<R> {
    base: &'static str,
    filter: Filter,
    variant: Variant<R, String>,
}

impl<R> TextCodec<R> {
    pub fn new(base: &'static str, filter: Filter, variant: Variant<R, String>) -> Self {
        Self {
            base,
            filter,
            variant,
        }
    }
}

#[async_trait]
impl<R: PackResource> Codec<R> for TextCodec<R> {
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        read_each(fs, dir, self.base, self.filter, |path, bytes| {
            Ok(self.variant.wrap(decode_utf8(path, bytes)?))
        })
        .await
    }

    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()> {
        let text = self.variant.unwrap(self.base, resource)?;
        let path = dir.join(id.to_path(self.base, self.filter.extension()));
        write_file(fs, &path, text.as_bytes()).await
    }
}

/// UTF-8 text handled as a list of lines, such as function bodies.
pub struct LinesCodec<R> {
    base: &'static str,
    extension: &'static str,
    variant: Variant<R, Vec<String>>,
}

impl<R> LinesCodec<R> {
    pub fn new(
        base: &'static str,
        extension: &'static str,
        variant: Variant<R, Vec<String>>,
    ) -> Self {
        Self {
            base,
            extension,
            variant,
        }
    }
}

#[async_trait]
impl<R: PackResource> Codec<R> for LinesCodec<R> {
    async fn read(&self, fs: &dyn PackFs, dir: &Path) -> Result<Vec<(ResourceLocation, R)>> {
        read_each(
            fs,
            dir,
            self.base,
            Filter::Extension(self.extension),
            |path, bytes| {
                let text = decode_utf8(path, bytes)?;
                Ok(self.variant.wrap(parse_lines(&text)))
            },
        )
        .await
    }

    async fn write(
        &self,
        fs: &dyn PackFs,
        dir: &Path,
        id: &ResourceLocation,
        resource: &R,
    ) -> Result<()> {
        let lines = self.variant.unwrap(self.base, resource)?;
        let path = dir.join(id.to_path(self.base, self.extension));
        write_file(fs, &path, join_lines(lines).as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::variant;
    use crate::error::PackError;
    use crate::fs::MemoryFs;
    use crate::resource::{AssetResource, DataResource};

    fn loc(s: &str) -> ResourceLocation {
        s.parse().unwrap()
    }

    fn lines(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn line_splitting() {
        assert_eq!(parse_lines("say 1\nsay 2\n"), lines(&["say 1", "say 2"]));
        assert_eq!(parse_lines("say 1\r\nsay 2"), lines(&["say 1", "say 2"]));
        assert_eq!(parse_lines("a\n\nb\n\n"), lines(&["a", "", "b", ""]));
        assert!(parse_lines("").is_empty());
        assert_eq!(join_lines(&lines(&["a", "b"])), "a\nb\n");
        assert_eq!(join_lines(&[]), "");
    }

    #[tokio::test]
    async fn function_is_written_line_per_command() {
        let fs = MemoryFs::new();
        let codec = LinesCodec::new("functions", ".mcfunction", variant!(DataResource::Function));
        let function = DataResource::Function(lines(&["say 1", "say 2"]));
        codec
            .write(&fs, Path::new("out/data"), &loc("namespace:test"), &function)
            .await
            .unwrap();
        assert_eq!(
            fs.read(Path::new("out/data/namespace/functions/test.mcfunction"))
                .await
                .unwrap(),
            b"say 1\nsay 2\n"
        );
        let read = codec.read(&fs, Path::new("out/data")).await.unwrap();
        assert_eq!(read, [(loc("namespace:test"), function)]);
    }

    #[tokio::test]
    async fn text_is_kept_verbatim() {
        let fs = MemoryFs::new();
        let codec = TextCodec::new(
            "texts",
            Filter::Extension(".txt"),
            variant!(AssetResource::Text),
        );
        let credits = AssetResource::Text("line one\r\nline two".to_string());
        codec
            .write(&fs, Path::new("assets"), &loc("minecraft:credits"), &credits)
            .await
            .unwrap();
        let read = codec.read(&fs, Path::new("assets")).await.unwrap();
        assert_eq!(read, [(loc("minecraft:credits"), credits)]);
    }

    #[tokio::test]
    async fn invalid_utf8_fails() {
        let fs = MemoryFs::new();
        fs.write(Path::new("assets/minecraft/texts/bad.txt"), &[0xc3, 0x28])
            .await
            .unwrap();
        let codec = TextCodec::new(
            "texts",
            Filter::Extension(".txt"),
            variant!(AssetResource::Text),
        );
        assert!(matches!(
            codec.read(&fs, Path::new("assets")).await,
            Err(PackError::Utf8 { .. })
        ));
    }
}
