mod compare;
mod raster;

pub use compare::{
    compare_images, compare_images_with_tolerance, generate_diff_image, pixel_difference,
    CompareResult,
};
pub use raster::rasterize;

use image::RgbaImage;
use material_layout::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualTestError {
    #[error("Failed to compare images: {0}")]
    Compare(String),
    #[error("Scene '{0}' drew no frames")]
    NoFrames(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, VisualTestError>;

/// Canvas background behind every scene
pub const BACKGROUND: Color = Color::rgb(0.125, 0.125, 0.125);

/// A view tree plus the ripple layout decorating it
pub struct Scene {
    pub name: String,
    pub tree: ViewTree,
    pub layout: MaterialLayout,
    pub width: u32,
    pub height: u32,
}

impl Scene {
    /// Two buttons side by side and a card holding one nested leaf.
    pub fn buttons(name: &str, config: RippleConfig) -> Self {
        let mut tree = ViewTree::new();
        let root = tree.add_root(Rect::new(0.0, 0.0, 240.0, 160.0));
        let buttons = [
            Rect::new(10.0, 10.0, 100.0, 50.0),
            Rect::new(120.0, 10.0, 100.0, 50.0),
        ];
        for frame in buttons {
            if let Some(id) = tree.add_leaf(root, frame) {
                tree.set_background(id, Color::from_hex(0x3F51B5));
            }
        }
        if let Some(card) = tree.add_group(root, Rect::new(10.0, 70.0, 210.0, 80.0)) {
            tree.set_background(card, Color::from_hex(0x303030));
            if let Some(leaf) = tree.add_leaf(card, Rect::new(10.0, 10.0, 60.0, 60.0)) {
                tree.set_background(leaf, Color::from_hex(0xFF9800));
            }
        }

        Self {
            name: name.to_string(),
            tree,
            layout: MaterialLayout::with_config(root, config),
            width: 240,
            height: 160,
        }
    }

    /// Rasterize one draw pass of the layout.
    pub fn draw(&mut self, frames: &mut FrameQueue) -> RgbaImage {
        let mut ctx = PaintContext::with_capacity(8);
        self.layout.dispatch_draw(&self.tree, &mut ctx, frames);
        rasterize(ctx.commands(), self.width, self.height, BACKGROUND)
    }
}

/// Every frame of one gesture, from the idle frame before the touch to the
/// idle frame after the ripple is erased.
pub fn render_gesture(scene: &mut Scene, x: f32, y: f32) -> Result<Vec<RgbaImage>> {
    let mut frames = FrameQueue::new();
    let mut images = vec![scene.draw(&mut frames)];
    frames.clear();

    scene
        .layout
        .intercept_touch(&scene.tree, &Event::TouchDown { x, y }, &mut frames);
    if frames.is_empty() {
        return Err(VisualTestError::NoFrames(scene.name.clone()));
    }

    while frames.pop().is_some() {
        images.push(scene.draw(&mut frames));
    }
    Ok(images)
}

/// Configuration for a visual test
#[derive(Clone)]
pub struct VisualTestConfig {
    /// Touch point in scene coordinates
    pub touch: (f32, f32),
    /// Similarity threshold (0.0 to 1.0, default 0.99)
    pub similarity_threshold: f64,
    /// Largest channel difference still counted as equal (default 0, exact match)
    pub pixel_tolerance: u8,
}

impl Default for VisualTestConfig {
    fn default() -> Self {
        Self {
            touch: (60.0, 35.0),
            similarity_threshold: 0.99,
            pixel_tolerance: 0,
        }
    }
}

/// Result of a visual test
pub struct VisualTestResult {
    /// Whether the idle frames before and after the gesture match
    pub passed: bool,
    /// The similarity score (0.0 to 1.0)
    pub similarity: f64,
    /// Number of frames rendered, idle frames included
    pub frame_count: usize,
    /// Path to diff image (if generated on failure)
    pub diff_path: Option<PathBuf>,
}

/// Get the path to the output directory for test artifacts
pub fn output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("output")
}

/// Get the path to a diff image
pub fn diff_path(scene_name: &str) -> PathBuf {
    output_dir().join(format!("{}_diff.png", scene_name))
}

/// Get the path to one saved frame
pub fn frame_path(scene_name: &str, index: usize) -> PathBuf {
    output_dir().join(format!("{}_{:03}.png", scene_name, index))
}

/// Run a gesture and check the widget returns to exactly the frame it started from
pub fn run_visual_test(scene: &mut Scene, config: &VisualTestConfig) -> Result<VisualTestResult> {
    let (x, y) = config.touch;
    let images = render_gesture(scene, x, y)?;
    let (Some(before), Some(after)) = (images.first(), images.last()) else {
        return Err(VisualTestError::NoFrames(scene.name.clone()));
    };

    if should_save_frames() {
        save_frames(&scene.name, &images)?;
    }

    let compare_result = compare_images_with_tolerance(before, after, config.pixel_tolerance)?;
    let passed = compare_result.similarity >= config.similarity_threshold
        && compare_result.differing_pixels == 0;

    // Generate diff if failed
    let diff = if !passed {
        std::fs::create_dir_all(output_dir())?;
        let diff_file = diff_path(&scene.name);
        generate_diff_image(before, after).save(&diff_file)?;
        Some(diff_file)
    } else {
        None
    };

    Ok(VisualTestResult {
        passed,
        similarity: compare_result.similarity,
        frame_count: images.len(),
        diff_path: diff,
    })
}

/// Write every frame as a numbered PNG under the output directory
pub fn save_frames(scene_name: &str, images: &[RgbaImage]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir())?;
    images
        .iter()
        .enumerate()
        .map(|(i, img)| -> Result<PathBuf> {
            let path = frame_path(scene_name, i);
            img.save(&path)?;
            Ok(path)
        })
        .collect()
}

/// Check if we're in save frames mode
pub fn should_save_frames() -> bool {
    std::env::var("SAVE_FRAMES").is_ok()
}
