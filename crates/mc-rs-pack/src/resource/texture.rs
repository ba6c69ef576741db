//! Textures and their `.png.mcmeta` sidecar.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Frame time, in ticks, when a sidecar does not give one.
pub const DEFAULT_FRAME_TIME: u32 = 1;

/// A PNG image plus whatever its sidecar file carried.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Texture {
    pub image: Vec<u8>,
    pub metadata: TextureMetadata,
}

impl Texture {
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            metadata: TextureMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: TextureMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Contents of a `<name>.png.mcmeta` file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextureMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villager: Option<VillagerSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<TextureSection>,
}

impl TextureMetadata {
    /// No section is present, so no sidecar file is needed.
    pub fn is_empty(&self) -> bool {
        self.animation.is_none() && self.villager.is_none() && self.texture.is_none()
    }
}

/// Animation section, with every frame's duration spelled out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawAnimation", into = "RawAnimation")]
pub struct Animation {
    pub frames: AnimationFrames,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub interpolate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationFrames {
    /// Every frame of the strip, top to bottom, each shown for `frametime`.
    Sequential { frametime: u32 },
    /// The listed frames in order.
    Explicit(Vec<AnimationFrame>),
}

impl Default for AnimationFrames {
    fn default() -> Self {
        Self::Sequential {
            frametime: DEFAULT_FRAME_TIME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    pub index: u32,
    pub time: u32,
}

impl AnimationFrame {
    pub fn new(index: u32, time: u32) -> Self {
        Self { index, time }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VillagerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<Hat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hat {
    None,
    Partial,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextureSection {
    #[serde(default, skip_serializing_if = "is_false")]
    pub blur: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub clamp: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// The most common frame time; ties go to the shorter duration.
pub fn most_frequent_time(frames: &[AnimationFrame]) -> Option<u32> {
    let mut counts = BTreeMap::new();
    for frame in frames {
        *counts.entry(frame.time).or_insert(0usize) += 1;
    }
    let mut best: Option<(u32, usize)> = None;
    for (time, count) in counts {
        if best.map_or(true, |(_, most)| count > most) {
            best = Some((time, count));
        }
    }
    best.map(|(time, _)| time)
}

/// On-disk shape of the animation section.
#[derive(Debug, Serialize, Deserialize)]
struct RawAnimation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frametime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frames: Option<Vec<RawFrame>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interpolate: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawFrame {
    Index(u32),
    Timed {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<u32>,
    },
}

impl From<RawAnimation> for Animation {
    fn from(raw: RawAnimation) -> Self {
        let frametime = raw.frametime.unwrap_or(DEFAULT_FRAME_TIME);
        let frames = match raw.frames {
            None => AnimationFrames::Sequential { frametime },
            Some(frames) => AnimationFrames::Explicit(
                frames
                    .into_iter()
                    .map(|frame| match frame {
                        RawFrame::Index(index) => AnimationFrame::new(index, frametime),
                        RawFrame::Timed { index, time } => {
                            AnimationFrame::new(index, time.unwrap_or(frametime))
                        }
                    })
                    .collect(),
            ),
        };
        Self {
            frames,
            width: raw.width,
            height: raw.height,
            interpolate: raw.interpolate.unwrap_or(false),
        }
    }
}

impl From<Animation> for RawAnimation {
    fn from(animation: Animation) -> Self {
        let (frametime, frames) = match animation.frames {
            AnimationFrames::Sequential { frametime } => (frametime, None),
            AnimationFrames::Explicit(frames) => {
                let common = most_frequent_time(&frames).unwrap_or(DEFAULT_FRAME_TIME);
                let frames = frames
                    .into_iter()
                    .map(|frame| {
                        if frame.time == common {
                            RawFrame::Index(frame.index)
                        } else {
                            RawFrame::Timed {
                                index: frame.index,
                                time: Some(frame.time),
                            }
                        }
                    })
                    .collect();
                (common, Some(frames))
            }
        };
        Self {
            frametime: (frametime != DEFAULT_FRAME_TIME).then_some(frametime),
            frames,
            width: animation.width,
            height: animation.height,
            interpolate: animation.interpolate.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn explicit(frames: &[(u32, u32)]) -> Animation {
        Animation {
            frames: AnimationFrames::Explicit(
                frames.iter().map(|&(i, t)| AnimationFrame::new(i, t)).collect(),
            ),
            ..Animation::default()
        }
    }

    #[test]
    fn uniform_frames_collapse_to_frametime() {
        let animation = explicit(&[(0, 3), (1, 3), (2, 3)]);
        let value = serde_json::to_value(&animation).unwrap();
        assert_eq!(value, json!({ "frametime": 3, "frames": [0, 1, 2] }));

        let back: Animation = serde_json::from_value(value).unwrap();
        assert_eq!(back, animation);
    }

    #[test]
    fn heterogeneous_frames_keep_exact_timing() {
        let animation = explicit(&[(0, 2), (1, 5), (2, 2), (3, 7)]);
        let value = serde_json::to_value(&animation).unwrap();
        assert_eq!(
            value,
            json!({
                "frametime": 2,
                "frames": [0, { "index": 1, "time": 5 }, 2, { "index": 3, "time": 7 }]
            })
        );

        let back: Animation = serde_json::from_value(value).unwrap();
        assert_eq!(back, animation);
    }

    #[test]
    fn tie_prefers_shorter_duration() {
        let frames = [
            AnimationFrame::new(0, 8),
            AnimationFrame::new(1, 4),
            AnimationFrame::new(2, 8),
            AnimationFrame::new(3, 4),
        ];
        assert_eq!(most_frequent_time(&frames), Some(4));
        assert_eq!(most_frequent_time(&[]), None);

        let value = serde_json::to_value(explicit(&[(0, 8), (1, 4)])).unwrap();
        assert_eq!(value, json!({ "frametime": 4, "frames": [{ "index": 0, "time": 8 }, 1] }));
    }

    #[test]
    fn default_values_are_omitted() {
        let value = serde_json::to_value(Animation::default()).unwrap();
        assert_eq!(value, json!({}));

        let animation = explicit(&[(0, 1), (1, 1)]);
        let value = serde_json::to_value(&animation).unwrap();
        assert_eq!(value, json!({ "frames": [0, 1] }));

        let animation = Animation {
            frames: AnimationFrames::Sequential { frametime: 5 },
            width: Some(16),
            height: None,
            interpolate: true,
        };
        let value = serde_json::to_value(&animation).unwrap();
        assert_eq!(value, json!({ "frametime": 5, "width": 16, "interpolate": true }));
        assert_eq!(serde_json::from_value::<Animation>(value).unwrap(), animation);
    }

    #[test]
    fn read_applies_frametime_to_untimed_frames() {
        let animation: Animation = serde_json::from_value(json!({
            "frametime": 4,
            "frames": [1, { "index": 0 }, { "index": 2, "time": 10 }]
        }))
        .unwrap();
        assert_eq!(
            animation.frames,
            AnimationFrames::Explicit(vec![
                AnimationFrame::new(1, 4),
                AnimationFrame::new(0, 4),
                AnimationFrame::new(2, 10),
            ])
        );
    }

    #[test]
    fn full_sidecar() {
        let metadata: TextureMetadata = serde_json::from_value(json!({
            "animation": { "frametime": 2 },
            "villager": { "hat": "partial" },
            "texture": { "blur": true }
        }))
        .unwrap();
        assert_eq!(
            metadata.animation.as_ref().map(|a| &a.frames),
            Some(&AnimationFrames::Sequential { frametime: 2 })
        );
        assert_eq!(metadata.villager.as_ref().and_then(|v| v.hat), Some(Hat::Partial));
        assert_eq!(
            metadata.texture,
            Some(TextureSection {
                blur: true,
                clamp: false
            })
        );
        assert!(!metadata.is_empty());
        assert!(TextureMetadata::default().is_empty());

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            value,
            json!({
                "animation": { "frametime": 2 },
                "villager": { "hat": "partial" },
                "texture": { "blur": true }
            })
        );
    }
}
