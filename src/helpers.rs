/// Normalize a location fragment into a directory path.
///
/// Strips a leading `#`, collapses repeated slashes, always starts with `/`
/// and never ends with one (except for the root itself).
pub fn clean_directory_path(raw: &str) -> String {
    let segments: Vec<&str> = raw
        .trim_start_matches('#')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

pub fn join_path(directory: &str, name: &str) -> String {
    if directory.ends_with('/') {
        format!("{}{}", directory, name)
    } else {
        format!("{}/{}", directory, name)
    }
}

pub fn parent_path(directory: &str) -> String {
    let cleaned = clean_directory_path(directory);
    match cleaned.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(index) => cleaned[..index].to_string(),
    }
}

/// Split a directory into `(label, path)` pairs, one per segment.
pub fn breadcrumb_segments(directory: &str) -> Vec<(String, String)> {
    let mut current = String::new();
    clean_directory_path(directory)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            current.push('/');
            current.push_str(segment);
            (segment.to_string(), current.clone())
        })
        .collect()
}

pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
