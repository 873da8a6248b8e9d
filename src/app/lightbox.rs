//! Lightbox methods
//!
//! Opening and paging the full-screen slide viewer, and loading slide
//! images through the terminal graphics protocol. Loaded protocols are
//! cached per slide path so paging back to a slide is instant.

use crate::{log_debug, model, App, ImageMetadata, ImagePreviewState};
use std::path::PathBuf;

/// Refuse to decode anything bigger than this
const MAX_IMAGE_SIZE_BYTES: u64 = 20 * 1024 * 1024;

impl App {
    /// Open the lightbox on the gallery cursor position
    pub(crate) fn open_lightbox(&mut self) {
        let items = self.expanded_gallery_items();
        if items.is_empty() {
            self.model.show_toast("No slides to view".to_string());
            return;
        }

        let cursor = self.model.navigation.grid_cursor;
        if let Some(state) = model::LightboxState::open(items, cursor) {
            log_debug(&format!(
                "Lightbox opened at {}/{}",
                state.index + 1,
                state.count()
            ));
            self.model.ui.lightbox = Some(state);
            self.ensure_current_image_loaded();
        }
    }

    /// Close the lightbox, keeping the gallery cursor where the viewer was
    pub(crate) fn close_lightbox(&mut self) {
        if let Some(state) = self.model.ui.lightbox.take() {
            self.model.navigation.grid_cursor = state.index;
        }
    }

    /// Page to the next slide (wraps past the last one)
    pub(crate) fn lightbox_next(&mut self) {
        if let Some(state) = &mut self.model.ui.lightbox {
            state.next();
            self.ensure_current_image_loaded();
        }
    }

    /// Page to the previous slide (wraps past the first one)
    pub(crate) fn lightbox_prev(&mut self) {
        if let Some(state) = &mut self.model.ui.lightbox {
            state.prev();
            self.ensure_current_image_loaded();
        }
    }

    /// Make sure the slide the lightbox shows has a load state
    fn ensure_current_image_loaded(&mut self) {
        let path = match &self.model.ui.lightbox {
            Some(state) => state.current().path.clone(),
            None => return,
        };
        self.ensure_image_loaded(&path);
    }

    /// Load a slide image into the protocol cache if it is not there yet
    pub(crate) fn ensure_image_loaded(&mut self, slide_path: &str) {
        if self.image_state_map.contains_key(slide_path) {
            return;
        }

        let picker = match &self.image_picker {
            Some(p) => p,
            None => {
                self.image_state_map.insert(
                    slide_path.to_string(),
                    ImagePreviewState::Failed {
                        metadata: ImageMetadata {
                            dimensions: None,
                            format: Some("Image preview disabled".to_string()),
                            file_size: 0,
                        },
                    },
                );
                return;
            }
        };

        // Configured slide paths are site-absolute ("/Posters/x.jpg");
        // resolve them under the asset root
        let disk_path = self.asset_root.join(slide_path.trim_start_matches('/'));

        log_debug(&format!("Loading image: {}", disk_path.display()));
        let state = match Self::load_image_preview(disk_path, picker) {
            Ok((protocol, metadata)) => ImagePreviewState::Ready { protocol, metadata },
            Err(metadata) => {
                log_debug(&format!("Image load failed: {}", slide_path));
                ImagePreviewState::Failed { metadata }
            }
        };
        self.image_state_map.insert(slide_path.to_string(), state);
    }

    fn load_image_preview(
        disk_path: PathBuf,
        picker: &ratatui_image::picker::Picker,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), ImageMetadata> {
        // Check file size
        let fs_metadata = match std::fs::metadata(&disk_path) {
            Ok(m) => m,
            Err(_) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some("File not found".to_string()),
                    file_size: 0,
                });
            }
        };

        let file_size = fs_metadata.len();
        if file_size > MAX_IMAGE_SIZE_BYTES {
            return Err(ImageMetadata {
                dimensions: None,
                format: Some("Too large".to_string()),
                file_size,
            });
        }

        let img = match image::open(&disk_path) {
            Ok(img) => img,
            Err(e) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Load error: {}", e)),
                    file_size,
                });
            }
        };

        let dimensions = (img.width(), img.height());
        let format = match img.color() {
            image::ColorType::L8 => "Grayscale 8-bit",
            image::ColorType::La8 => "Grayscale+Alpha 8-bit",
            image::ColorType::Rgb8 => "RGB 8-bit",
            image::ColorType::Rgba8 => "RGBA 8-bit",
            image::ColorType::L16 => "Grayscale 16-bit",
            image::ColorType::La16 => "Grayscale+Alpha 16-bit",
            image::ColorType::Rgb16 => "RGB 16-bit",
            image::ColorType::Rgba16 => "RGBA 16-bit",
            image::ColorType::Rgb32F => "RGB 32-bit float",
            image::ColorType::Rgba32F => "RGBA 32-bit float",
            _ => "Unknown",
        };

        // Pre-downscale large images before handing them to the protocol;
        // ~200x60 cells covers a large terminal, 1.25x headroom for quality
        let font_size = picker.font_size();
        let max_reasonable_width = 200 * font_size.0 as u32 * 5 / 4;
        let max_reasonable_height = 60 * font_size.1 as u32 * 5 / 4;

        let processed_img =
            if img.width() > max_reasonable_width || img.height() > max_reasonable_height {
                let scale_factor = (img.width() as f32 / max_reasonable_width as f32)
                    .max(img.height() as f32 / max_reasonable_height as f32);

                // Adaptive filter selection based on downscale amount
                let filter = if scale_factor > 4.0 {
                    image::imageops::FilterType::Triangle
                } else if scale_factor > 2.0 {
                    image::imageops::FilterType::CatmullRom
                } else {
                    image::imageops::FilterType::Lanczos3
                };

                log_debug(&format!(
                    "Pre-downscaling {}x{} by {:.2}x with {:?}",
                    img.width(),
                    img.height(),
                    scale_factor,
                    filter
                ));
                img.resize(max_reasonable_width, max_reasonable_height, filter)
            } else {
                img
            };

        let protocol = picker.new_resize_protocol(processed_img);

        let metadata = ImageMetadata {
            dimensions: Some(dimensions),
            format: Some(format.to_string()),
            file_size,
        };

        Ok((protocol, metadata))
    }
}
