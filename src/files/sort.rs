use feruca::{Collator, Locale, Tailoring};

use crate::models::FileObject;

/// Root-locale collator with punctuation kept significant, so `_backup` and
/// `.minecraft` list ahead of letters the way a file browser shows them.
fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Order a listing for display: directories first, each group by name.
///
/// Two stable passes: by name, then directories ahead of files, so each
/// group keeps the name order from the first pass.
pub fn sort_files(files: &mut [FileObject]) {
    let mut collator = name_collator();
    files.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
    files.sort_by_key(|file| file.is_file);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn names(files: &[FileObject]) -> Vec<String> {
        files.iter().map(|file| file.name.clone()).collect()
    }

    fn sorted(mut files: Vec<FileObject>) -> Vec<FileObject> {
        sort_files(&mut files);
        files
    }

    fn sample() -> Vec<FileObject> {
        vec![
            FileObject::new("server.properties", true),
            FileObject::new("world", false),
            FileObject::new("Banner.png", true),
            FileObject::new("plugins", false),
            FileObject::new("apple.txt", true),
            FileObject::new("Config", false),
            FileObject::new("_backup", false),
            FileObject::new("2024.log", true),
        ]
    }

    #[test]
    fn test_directories_before_files_each_by_name() {
        let sorted = sorted(sample());

        assert_eq!(
            names(&sorted),
            vec![
                "_backup",
                "Config",
                "plugins",
                "world",
                "2024.log",
                "apple.txt",
                "Banner.png",
                "server.properties",
            ]
        );

        let first_file = sorted.iter().position(|file| file.is_file).unwrap();
        assert!(sorted[..first_file].iter().all(|file| !file.is_file));
        assert!(sorted[first_file..].iter().all(|file| file.is_file));
    }

    #[test]
    fn test_accented_and_punctuation_names() {
        let files = ["zebra", "éclair", ".a", "-a", "_a"]
            .into_iter()
            .map(|name| FileObject::new(name, true))
            .collect();

        assert_eq!(
            names(&sorted(files)),
            vec!["_a", "-a", ".a", "éclair", "zebra"]
        );
    }

    #[test]
    fn test_game_server_folders() {
        let files = ["world_the_end", "world-nether", ".minecraft", "world", "Éditions"]
            .into_iter()
            .map(|name| FileObject::new(name, false))
            .collect();

        assert_eq!(
            names(&sorted(files)),
            vec![".minecraft", "Éditions", "world", "world_the_end", "world-nether"]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sorted(sample());
        let twice = sorted(once.clone());
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_name_collation() {
        let mut collator = name_collator();
        assert_eq!(collator.collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.collate("Zed", "alpha"), Ordering::Greater);
        assert_eq!(collator.collate("a", "A"), Ordering::Less);
        assert_eq!(collator.collate("file", "file"), Ordering::Equal);
        assert_eq!(collator.collate("_x", "1"), Ordering::Less);
        assert_eq!(collator.collate("9", "a"), Ordering::Less);
        assert_eq!(collator.collate("éclair", "zebra"), Ordering::Less);
    }

    #[test]
    fn test_empty() {
        let mut files: Vec<FileObject> = Vec::new();
        sort_files(&mut files);
        assert!(files.is_empty());
    }
}
