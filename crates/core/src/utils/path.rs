//! Lexical path helpers
//!
//! Nothing here touches the file system, so paths that do not exist yet
//! normalize the same way as ones that do.

use std::path::{Component, Path, PathBuf};

/// Normalize a path (remove `.` and resolve `..` against preceding segments)
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            Component::CurDir => {}
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }
    components.iter().collect()
}

/// Resolve `path` against `base` when relative, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/ws/./force-app/../pkg1/classes/")),
            PathBuf::from("/ws/pkg1/classes")
        );
        assert_eq!(normalize(Path::new("/../ws")), PathBuf::from("/ws"));
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize(Path::new("/ws"), Path::new("pkg1/Foo.cls")),
            PathBuf::from("/ws/pkg1/Foo.cls")
        );
        assert_eq!(
            absolutize(Path::new("/ws"), Path::new("/other/../ws/Foo.cls")),
            PathBuf::from("/ws/Foo.cls")
        );
    }
}
