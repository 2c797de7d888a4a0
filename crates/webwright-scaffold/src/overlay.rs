//! Template overlay
//!
//! Writes the template tree over a freshly generated project. The default
//! tree is compiled into the binary; `copy_tree` handles an explicit
//! template directory supplied on the command line.

use anyhow::{Context, Result};
use camino::Utf8Path;
use rust_embed::RustEmbed;
use tracing::debug;

/// Template files compiled into the binary
#[derive(RustEmbed)]
#[folder = "templates/"]
struct TemplateAssets;

/// Write the embedded template tree into the project directory, creating
/// parent directories as needed. Returns the number of files written.
pub fn apply_embedded(project_dir: &Utf8Path) -> Result<usize> {
    let mut written = 0;

    for rel_path in TemplateAssets::iter() {
        let asset = TemplateAssets::get(&rel_path)
            .with_context(|| format!("Missing embedded template: {}", rel_path))?;

        let dest = project_dir.join(rel_path.as_ref());
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent))?;
        }

        std::fs::write(&dest, asset.data.as_ref())
            .with_context(|| format!("Failed to write {}", dest))?;
        debug!("Wrote template file {}", dest);
        written += 1;
    }

    Ok(written)
}

/// Recursively copy a template directory over the project directory.
/// Existing files with the same relative path are overwritten. Returns the
/// number of files written.
pub fn copy_tree(from: &Utf8Path, to: &Utf8Path) -> Result<usize> {
    std::fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to))?;

    let mut written = 0;
    let entries =
        from.read_dir_utf8().with_context(|| format!("Failed to read {}", from))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", from))?;
        let src = entry.path();
        let dst = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            written += copy_tree(src, &dst)?;
        } else {
            std::fs::copy(src, &dst)
                .with_context(|| format!("Failed to copy {} to {}", src, dst))?;
            written += 1;
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_apply_embedded_writes_template_tree() {
        let (_guard, project) = temp_dir();

        let written = apply_embedded(&project).unwrap();
        assert!(written >= 2);
        assert!(project.join("eslint.config.mjs").is_file());
        assert!(project.join("src/app/layout.tsx").is_file());
    }

    #[test]
    fn test_apply_embedded_overwrites_existing_files() {
        let (_guard, project) = temp_dir();
        std::fs::write(project.join("eslint.config.mjs"), "stale").unwrap();

        apply_embedded(&project).unwrap();
        let content = std::fs::read_to_string(project.join("eslint.config.mjs")).unwrap();
        assert!(content.contains("typescript-eslint"));
    }

    #[test]
    fn test_copy_tree_recurses() {
        let (_guard, root) = temp_dir();
        let src = root.join("tpl");
        std::fs::create_dir_all(src.join("nested/deep")).unwrap();
        std::fs::write(src.join("top.txt"), "top").unwrap();
        std::fs::write(src.join("nested/deep/leaf.txt"), "leaf").unwrap();

        let dst = root.join("out");
        let written = copy_tree(&src, &dst).unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("nested/deep/leaf.txt")).unwrap(),
            "leaf"
        );
    }
}
