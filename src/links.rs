//! Links from the generated page to its images and background video.
//!
//! Every link is relative to the directory the page is written to, so the
//! output can live anywhere (`index.html`, `public/index.html`, ...) and
//! still find `images/`. Each path segment is percent-encoded: filenames
//! like `1 TRANS order #5.jpg` would otherwise be cut at the `#` by the
//! browser.
//!
//! ```text
//! output = "index.html"         images/1%20TRANS%20a.jpg
//! output = "public/index.html"  ../images/1%20TRANS%20a.jpg
//! ```

use crate::config::GalleryConfig;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::path::{Component, Path};

/// Characters escaped inside one URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

/// Encoded link targets for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    /// Prefix for image `src` values. Empty when the images sit next to the page.
    pub image_base: String,
    pub background_video: Option<String>,
}

impl PageLinks {
    pub fn image_href(&self, filename: &str) -> String {
        let name = encode_segment(filename);
        if self.image_base.is_empty() {
            name
        } else {
            format!("{}/{}", self.image_base, name)
        }
    }
}

/// Compute the page's links for a gallery rooted at `root`.
///
/// `root` should be absolute when the configured output path is absolute;
/// otherwise the relative layout of the config is used as-is.
pub fn page_links(config: &GalleryConfig, root: &Path) -> PageLinks {
    let paths = config.paths.resolve(root);
    let page_dir = paths.output_file.parent().unwrap_or(Path::new(""));

    PageLinks {
        image_base: relative_href(&paths.image_dir, page_dir),
        background_video: config
            .page
            .background_video()
            .map(|video| relative_href(&root.join(video), page_dir)),
    }
}

fn relative_href(target: &Path, page_dir: &Path) -> String {
    let rel = pathdiff::diff_paths(target, page_dir).unwrap_or_else(|| target.to_path_buf());
    encode_path(&rel)
}

/// Join a path's components with `/`, percent-encoding each one.
pub fn encode_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(encode_segment(&s.to_string_lossy())),
            Component::ParentDir => Some("..".to_string()),
            // Leading empty segment renders as "/".
            Component::RootDir => Some(String::new()),
            Component::CurDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
