//! Cut a grid sprite sheet into numbered frame files
//!
//! Frames are written row-major as `{prefix}_{index:02}.png`. A sheet smaller
//! than the requested grid is rejected before anything is written; pixels
//! beyond the grid are ignored.

use std::path::{Path, PathBuf};

use image::GenericImageView;

/// Grid and naming for a slicing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceOptions {
    pub frame_width: u32,
    pub frame_height: u32,
    pub cols: u32,
    pub rows: u32,
    pub prefix: String,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            frame_width: 256,
            frame_height: 256,
            cols: 6,
            rows: 4,
            prefix: "frame".to_string(),
        }
    }
}

impl SliceOptions {
    /// Minimum sheet size the grid needs; `None` for an empty grid or one
    /// too large to address in `u32` pixels
    pub fn required_size(&self) -> Option<(u32, u32)> {
        if self.frame_width == 0 || self.frame_height == 0 || self.cols == 0 || self.rows == 0 {
            return None;
        }
        self.cols.checked_mul(self.rows)?;
        Some((
            self.frame_width.checked_mul(self.cols)?,
            self.frame_height.checked_mul(self.rows)?,
        ))
    }

    /// File name of the `index`-th frame
    pub fn file_name(&self, index: u32) -> String {
        format!("{}_{:02}.png", self.prefix, index)
    }
}

/// Error type for slicing
#[derive(Debug)]
pub enum SliceError {
    /// Source image could not be opened or decoded
    Open { path: PathBuf, message: String },
    /// Output directory could not be created
    Io(std::io::Error),
    /// A frame could not be written
    Save { path: PathBuf, message: String },
    /// Grid is empty or overflows `u32` pixel coordinates
    InvalidGrid {
        frame_width: u32,
        frame_height: u32,
        cols: u32,
        rows: u32,
    },
    /// Sheet doesn't cover the grid
    TooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },
}

impl std::fmt::Display for SliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceError::Open { path, message } => {
                write!(f, "cannot open {}: {}", path.display(), message)
            }
            SliceError::Io(e) => write!(f, "I/O error: {}", e),
            SliceError::Save { path, message } => {
                write!(f, "cannot write {}: {}", path.display(), message)
            }
            SliceError::InvalidGrid {
                frame_width,
                frame_height,
                cols,
                rows,
            } => write!(
                f,
                "invalid grid: {}x{} frames of {}x{} pixels",
                cols, rows, frame_width, frame_height
            ),
            SliceError::TooSmall {
                width,
                height,
                required_width,
                required_height,
            } => write!(
                f,
                "sheet is {}x{} but the grid needs at least {}x{}",
                width, height, required_width, required_height
            ),
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SliceError {
    fn from(e: std::io::Error) -> Self {
        SliceError::Io(e)
    }
}

/// Slice `image_path` into `output_dir`, returning the written paths in order
pub fn slice_sheet(
    image_path: &Path,
    output_dir: &Path,
    options: &SliceOptions,
) -> Result<Vec<PathBuf>, SliceError> {
    let (required_width, required_height) =
        options.required_size().ok_or(SliceError::InvalidGrid {
            frame_width: options.frame_width,
            frame_height: options.frame_height,
            cols: options.cols,
            rows: options.rows,
        })?;

    let sheet = image::open(image_path).map_err(|e| SliceError::Open {
        path: image_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (width, height) = sheet.dimensions();
    if width < required_width || height < required_height {
        return Err(SliceError::TooSmall {
            width,
            height,
            required_width,
            required_height,
        });
    }

    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity((options.cols * options.rows) as usize);
    for row in 0..options.rows {
        for col in 0..options.cols {
            let index = row * options.cols + col;
            let frame = sheet.crop_imm(
                col * options.frame_width,
                row * options.frame_height,
                options.frame_width,
                options.frame_height,
            );
            let path = output_dir.join(options.file_name(index));
            frame.save(&path).map_err(|e| SliceError::Save {
                path: path.clone(),
                message: e.to_string(),
            })?;
            log::debug!("wrote {}", path.display());
            written.push(path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_sheet(dir: &Path, width: u32, height: u32, frame: u32) -> PathBuf {
        let path = dir.join("sheet.png");
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x / frame) as u8, (y / frame) as u8, 0, 255])
        })
        .save(&path)
        .unwrap();
        path
    }

    #[test]
    fn test_full_size_sheet_gives_24_named_frames() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path(), 1536, 1024, 256);
        let out = dir.path().join("out/chat");
        let options = SliceOptions {
            prefix: "chat".to_string(),
            ..SliceOptions::default()
        };

        let written = slice_sheet(&sheet, &out, &options).unwrap();
        assert_eq!(written.len(), 24);
        assert_eq!(written[0], out.join("chat_00.png"));
        assert_eq!(written[23], out.join("chat_23.png"));

        // Row-major: frame 7 is row 1, column 1
        let frame = image::open(&written[7]).unwrap().to_rgba8();
        assert_eq!(frame.dimensions(), (256, 256));
        assert_eq!(frame.get_pixel(10, 10), &Rgba([1, 1, 0, 255]));
        let last = image::open(&written[23]).unwrap().to_rgba8();
        assert_eq!(last.get_pixel(255, 255), &Rgba([5, 3, 0, 255]));

        let on_disk = std::fs::read_dir(&out).unwrap().count();
        assert_eq!(on_disk, 24);
    }

    #[test]
    fn test_small_frames_custom_grid() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path(), 40, 20, 10);
        let options = SliceOptions {
            frame_width: 10,
            frame_height: 10,
            cols: 4,
            rows: 2,
            prefix: "dog".to_string(),
        };
        let written = slice_sheet(&sheet, dir.path(), &options).unwrap();
        assert_eq!(written.len(), 8);
        assert!(written[5].ends_with("dog_05.png"));
    }

    #[test]
    fn test_undersized_sheet_rejected_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path(), 1500, 1024, 256);
        let out = dir.path().join("frames");
        let err = slice_sheet(&sheet, &out, &SliceOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            SliceError::TooSmall {
                width: 1500,
                required_width: 1536,
                ..
            }
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_overflowing_or_empty_grid_rejected_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = write_sheet(dir.path(), 64, 64, 32);
        let out = dir.path().join("out");
        let grids = [
            SliceOptions {
                frame_width: 1 << 31,
                cols: 2,
                ..SliceOptions::default()
            },
            SliceOptions {
                frame_height: u32::MAX,
                rows: 3,
                ..SliceOptions::default()
            },
            SliceOptions {
                frame_width: 0,
                ..SliceOptions::default()
            },
            SliceOptions {
                rows: 0,
                ..SliceOptions::default()
            },
        ];
        for options in &grids {
            assert_eq!(options.required_size(), None, "{options:?}");
            let err = slice_sheet(&sheet, &out, options).unwrap_err();
            assert!(matches!(err, SliceError::InvalidGrid { .. }), "{err}");
            assert!(!out.exists());
        }
        assert_eq!(SliceOptions::default().required_size(), Some((1536, 1024)));
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = slice_sheet(
            &dir.path().join("missing.png"),
            dir.path(),
            &SliceOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SliceError::Open { .. }));
    }

    #[test]
    fn test_file_names_are_zero_padded() {
        let options = SliceOptions::default();
        assert_eq!(options.file_name(3), "frame_03.png");
        assert_eq!(options.file_name(23), "frame_23.png");
    }
}
