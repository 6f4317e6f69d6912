//! Sprite sheets and background images
//!
//! Sheets are uniform grids (6 columns x 4 rows); the frame size is the sheet
//! size divided by the grid. Any load failure is fatal at startup.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::consts::{BACKGROUND_FRAMES, HEIGHT, SHEET_COLS, SHEET_ROWS, WIDTH};
use crate::settings::AssetPaths;

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    /// File could not be opened or decoded
    Load { path: PathBuf, message: String },
    /// Sheet is too small to hold the grid
    Dimensions {
        path: PathBuf,
        width: u32,
        height: u32,
        cols: u32,
        rows: u32,
    },
    /// Wrong number of background images configured
    BackgroundCount { found: usize, expected: usize },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Load { path, message } => {
                write!(f, "failed to load {}: {}", path.display(), message)
            }
            AssetError::Dimensions {
                path,
                width,
                height,
                cols,
                rows,
            } => write!(
                f,
                "{} is {}x{}, too small for a {}x{} frame grid",
                path.display(),
                width,
                height,
                cols,
                rows
            ),
            AssetError::BackgroundCount { found, expected } => {
                write!(f, "expected {} background images, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for AssetError {}

fn open_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| AssetError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// A grid-sliced sprite sheet
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub image: RgbaImage,
    pub cols: u32,
    pub rows: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SpriteSheet {
    /// Load a sheet from disk
    pub fn open(path: &Path, cols: u32, rows: u32) -> Result<Self, AssetError> {
        let image = open_rgba(path)?;
        Self::from_image(image, cols, rows).map_err(|(width, height)| AssetError::Dimensions {
            path: path.to_path_buf(),
            width,
            height,
            cols,
            rows,
        })
    }

    /// Wrap an in-memory image; fails with its size if a frame would be empty
    pub fn from_image(image: RgbaImage, cols: u32, rows: u32) -> Result<Self, (u32, u32)> {
        let (width, height) = image.dimensions();
        if cols == 0 || rows == 0 || width < cols || height < rows {
            return Err((width, height));
        }
        Ok(Self {
            frame_width: width / cols,
            frame_height: height / rows,
            image,
            cols,
            rows,
        })
    }

    /// Copy of a single frame
    pub fn frame(&self, col: u32, row: u32) -> RgbaImage {
        debug_assert!(col < self.cols && row < self.rows, "frame outside grid");
        imageops::crop_imm(
            &self.image,
            col * self.frame_width,
            row * self.frame_height,
            self.frame_width,
            self.frame_height,
        )
        .to_image()
    }

    /// All frames, row-major
    pub fn frames(&self) -> Vec<Vec<RgbaImage>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.frame(col, row)).collect())
            .collect()
    }

    /// Geometry without the pixels, kept by the renderer after upload
    pub fn grid(&self) -> SheetGrid {
        let (width, height) = self.image.dimensions();
        SheetGrid {
            width,
            height,
            frame_width: self.frame_width,
            frame_height: self.frame_height,
        }
    }

    pub fn uv_rect(&self, col: u32, row: u32, flip_x: bool) -> [f32; 4] {
        self.grid().uv_rect(col, row, flip_x)
    }
}

/// Sheet and frame sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGrid {
    pub width: u32,
    pub height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SheetGrid {
    /// Normalized texture coordinates `[u0, v0, u1, v1]` of a frame;
    /// `flip_x` swaps the horizontal pair
    pub fn uv_rect(&self, col: u32, row: u32, flip_x: bool) -> [f32; 4] {
        let u0 = (col * self.frame_width) as f32 / self.width as f32;
        let u1 = ((col + 1) * self.frame_width) as f32 / self.width as f32;
        let v0 = (row * self.frame_height) as f32 / self.height as f32;
        let v1 = ((row + 1) * self.frame_height) as f32 / self.height as f32;
        if flip_x {
            [u1, v0, u0, v1]
        } else {
            [u0, v0, u1, v1]
        }
    }
}

/// Load a background and scale it to the viewport
pub fn load_background(path: &Path) -> Result<RgbaImage, AssetError> {
    let image = open_rgba(path)?;
    Ok(imageops::resize(
        &image,
        WIDTH as u32,
        HEIGHT as u32,
        FilterType::Triangle,
    ))
}

/// Everything the renderer uploads at startup
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub cat: SpriteSheet,
    pub dog: SpriteSheet,
    pub backgrounds: Vec<RgbaImage>,
}

impl GameAssets {
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        if paths.backgrounds.len() != BACKGROUND_FRAMES {
            return Err(AssetError::BackgroundCount {
                found: paths.backgrounds.len(),
                expected: BACKGROUND_FRAMES,
            });
        }

        let cat = SpriteSheet::open(&paths.cat_sheet, SHEET_COLS, SHEET_ROWS)?;
        log::info!(
            "Loaded cat sheet {} ({}x{} frames)",
            paths.cat_sheet.display(),
            cat.frame_width,
            cat.frame_height
        );
        let dog = SpriteSheet::open(&paths.dog_sheet, SHEET_COLS, SHEET_ROWS)?;
        log::info!(
            "Loaded dog sheet {} ({}x{} frames)",
            paths.dog_sheet.display(),
            dog.frame_width,
            dog.frame_height
        );
        let backgrounds = paths
            .backgrounds
            .iter()
            .map(|p| load_background(p))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Loaded {} backgrounds", backgrounds.len());

        Ok(Self {
            cat,
            dog,
            backgrounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Sheet whose pixel red/green channels encode the frame cell
    fn grid_sheet(frame: u32) -> RgbaImage {
        RgbaImage::from_fn(frame * SHEET_COLS, frame * SHEET_ROWS, |x, y| {
            Rgba([(x / frame) as u8, (y / frame) as u8, 0, 255])
        })
    }

    #[test]
    fn test_frames_come_from_their_cell() {
        let sheet = SpriteSheet::from_image(grid_sheet(8), SHEET_COLS, SHEET_ROWS).unwrap();
        assert_eq!((sheet.frame_width, sheet.frame_height), (8, 8));
        let frame = sheet.frame(4, 2);
        assert_eq!(frame.dimensions(), (8, 8));
        assert_eq!(frame.get_pixel(0, 0), &Rgba([4, 2, 0, 255]));
        assert_eq!(frame.get_pixel(7, 7), &Rgba([4, 2, 0, 255]));

        let grid = sheet.frames();
        assert_eq!(grid.len(), SHEET_ROWS as usize);
        assert_eq!(grid[3][5].get_pixel(3, 3), &Rgba([5, 3, 0, 255]));
    }

    #[test]
    fn test_uv_rect_and_flip() {
        let sheet = SpriteSheet::from_image(grid_sheet(10), SHEET_COLS, SHEET_ROWS).unwrap();
        let [u0, v0, u1, v1] = sheet.uv_rect(1, 2, false);
        assert!((u0 - 1.0 / 6.0).abs() < 1e-6);
        assert!((u1 - 2.0 / 6.0).abs() < 1e-6);
        assert!((v0 - 0.5).abs() < 1e-6);
        assert!((v1 - 0.75).abs() < 1e-6);
        assert_eq!(sheet.uv_rect(1, 2, true), [u1, v0, u0, v1]);
    }

    #[test]
    fn test_too_small_sheet_rejected() {
        let tiny = RgbaImage::new(3, 10);
        assert_eq!(
            SpriteSheet::from_image(tiny, SHEET_COLS, SHEET_ROWS).err(),
            Some((3, 10))
        );
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = SpriteSheet::open(Path::new("does/not/exist.png"), 6, 4).unwrap_err();
        assert!(matches!(err, AssetError::Load { .. }));
        assert!(err.to_string().contains("does/not/exist.png"));
    }

    #[test]
    fn test_background_is_scaled_to_viewport() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        RgbaImage::from_pixel(64, 36, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        let bg = load_background(&path).unwrap();
        assert_eq!(bg.dimensions(), (WIDTH as u32, HEIGHT as u32));
    }

    #[test]
    fn test_wrong_background_count() {
        let paths = AssetPaths {
            backgrounds: vec![PathBuf::from("one.png")],
            ..AssetPaths::default()
        };
        assert!(matches!(
            GameAssets::load(&paths),
            Err(AssetError::BackgroundCount {
                found: 1,
                expected: 4
            })
        ));
    }
}
