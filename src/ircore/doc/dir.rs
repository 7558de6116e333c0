use super::text;
use super::Document;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Walks a directory tree breadth first, one document per text file.
///
/// Entries are visited in sorted order so document ids are assigned the same
/// way on every run. The document id is the file path relative to the root,
/// with `/` separators, or the file name when the root is itself a file.
pub struct DirIter {
    root: PathBuf,
    path_queue: VecDeque<PathBuf>,
}

impl DirIter {
    pub fn new(path: &Path) -> Self {
        DirIter {
            root: path.to_path_buf(),
            path_queue: VecDeque::from(vec![path.to_path_buf()]),
        }
    }

    fn doc_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        if parts.is_empty() {
            return path.file_name().map(|name| name.to_string_lossy().to_string());
        }
        Some(parts.join("/"))
    }

    fn ignore(path: &Path) -> bool {
        //by default, ignore hidden files on unix like platforms
        path.file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }

    fn load(&self, path: &Path) -> Option<Document> {
        let id = self.doc_id(path)?;
        match text::read_to_string(path) {
            Ok(content) => Some(Document::new(id, content)),
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                None
            }
        }
    }
}

impl Iterator for DirIter {
    type Item = Document;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.path_queue.pop_front() {
            if Self::ignore(&path) {
                log::info!("ignore {}", path.display());
            } else if path.is_file() {
                if let Some(doc) = self.load(&path) {
                    return Some(doc);
                }
            } else if path.is_dir() {
                log::debug!("{}...", path.display());
                match path.read_dir() {
                    Ok(entries) => {
                        let mut children: Vec<PathBuf> = entries
                            .filter_map(|entry| entry.ok().map(|e| e.path()))
                            .collect();
                        children.sort();
                        self.path_queue.extend(children);
                    }
                    Err(e) => log::error!("read dir {} failed: {}", path.display(), e),
                }
            }
        }
        None
    }
}
