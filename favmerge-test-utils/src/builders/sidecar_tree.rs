//! Builder for temporary trees of sidecar files

use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal Ableton favorites sidecar body tagging `name` with one label
pub fn favorites_xmp(name: &str) -> String {
    format!(
        r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about="" xmlns:ablFR="https://ns.ableton.com/xmp/fs-resources/1.0/">
      <ablFR:items>
        <rdf:Bag>
          <rdf:li rdf:parseType="Resource">
            <ablFR:filePath>{name}</ablFR:filePath>
            <ablFR:keywords>
              <rdf:Bag>
                <rdf:li>Favorites|Red</rdf:li>
              </rdf:Bag>
            </ablFR:keywords>
          </rdf:li>
        </rdf:Bag>
      </ablFR:items>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>
"#
    )
}

/// A laid-out fixture tree, removed when dropped
pub struct SidecarTree {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl SidecarTree {
    /// Root of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the tree
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Every file written, in creation order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Builder for a temporary directory of sidecar and non-sidecar files
#[derive(Debug, Default)]
pub struct SidecarTreeBuilder {
    files: Vec<(PathBuf, Vec<u8>)>,
    directories: Vec<PathBuf>,
}

impl SidecarTreeBuilder {
    /// Create a new, empty tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a favorites sidecar at `relative`, creating parent folders as needed
    pub fn with_sidecar(mut self, relative: impl AsRef<Path>) -> Self {
        let relative = relative.as_ref();
        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.files
            .push((relative.to_path_buf(), favorites_xmp(&name).into_bytes()));
        self
    }

    /// Add sidecars with the same base name under each of `folders`
    pub fn with_sidecar_in_each<I, S>(mut self, folders: I, name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        for folder in folders {
            self = self.with_sidecar(folder.as_ref().join(name));
        }
        self
    }

    /// Add an arbitrary file at `relative`
    pub fn with_file(mut self, relative: impl AsRef<Path>, content: &[u8]) -> Self {
        self.files
            .push((relative.as_ref().to_path_buf(), content.to_vec()));
        self
    }

    /// Add an empty directory at `relative`
    pub fn with_dir(mut self, relative: impl AsRef<Path>) -> Self {
        self.directories.push(relative.as_ref().to_path_buf());
        self
    }

    /// Write everything into a fresh temporary directory
    pub fn build(self) -> Result<SidecarTree> {
        let dir = TempDir::new()?;

        for relative in &self.directories {
            fs::create_dir_all(dir.path().join(relative))?;
        }

        let mut files = Vec::with_capacity(self.files.len());
        for (relative, content) in self.files {
            let path = dir.path().join(&relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            files.push(path);
        }

        Ok(SidecarTree { dir, files })
    }
}
