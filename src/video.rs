use crate::model::{FileRef, FolderNode};
use crate::utils::split_extension;

pub const DEFAULT_VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "mov"];

/// Decides which files count as episodes, by extension only.
#[derive(Debug, Clone)]
pub struct VideoFilter {
    extensions: Vec<String>,
}

impl Default for VideoFilter {
    fn default() -> Self {
        Self::new(DEFAULT_VIDEO_EXTENSIONS)
    }
}

impl VideoFilter {
    /// Extensions are matched case-insensitively; a leading dot is optional.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn is_video(&self, file_name: &str) -> bool {
        let (_, ext) = split_extension(file_name);
        match ext.strip_prefix('.') {
            Some(ext) if !ext.is_empty() => {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            }
            _ => false,
        }
    }

    /// Video files of `folder`'s whole subtree: the folder's own files first,
    /// then each subfolder in stored order, depth-first.
    pub fn collect_video_files(&self, folder: &FolderNode) -> Vec<FileRef> {
        let mut videos = Vec::new();
        self.collect_into(folder, &mut videos);
        videos
    }

    fn collect_into(&self, folder: &FolderNode, videos: &mut Vec<FileRef>) {
        videos.extend(
            folder
                .files
                .iter()
                .filter(|file| self.is_video(&file.name))
                .cloned(),
        );
        for sub_folder in &folder.sub_folders {
            self.collect_into(sub_folder, videos);
        }
    }
}

/// [`VideoFilter::collect_video_files`] with the default extension set.
pub fn collect_video_files(folder: &FolderNode) -> Vec<FileRef> {
    VideoFilter::default().collect_video_files(folder)
}
