//! Relative path computation

use std::path::{Component, Path, PathBuf};

/// Express `target` relative to the directory `base`.
///
/// Both paths are normalised lexically first. The result climbs out of
/// `base` with `..` up to the deepest common ancestor and then descends to
/// `target`, so `base.join(result)` names `target` again. Returns `None`
/// when the paths have no common root, e.g. different Windows drives, or
/// when only one of them is absolute.
pub fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
    if target.is_absolute() != base.is_absolute() {
        return None;
    }

    let target = normalize(target);
    let base = normalize(base);
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();

    if let (Some(Component::Prefix(t)), Some(Component::Prefix(b))) = (target.first(), base.first())
        && t != b
    {
        return None;
    }

    let common = target
        .iter()
        .zip(&base)
        .take_while(|(t, b)| t == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push(Component::ParentDir);
    }
    for component in &target[common..] {
        relative.push(component);
    }

    if relative.as_os_str().is_empty() {
        relative.push(Component::CurDir);
    }
    Some(relative)
}

/// Remove `.` segments and fold `..` into its parent without touching the disk
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}
