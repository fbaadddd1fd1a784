//! Playlist file name sanitization

/// Turn a configured playlist name into a safe `.m3u` file name.
///
/// The name is lowercased and any character that is unsafe in file names is
/// replaced by a visually similar Unicode character, so a name like
/// `AC/DC` can never place the playlist outside its folder.
///
/// ```text
/// playlist_file_name("Rock")        → "rock.m3u"
/// playlist_file_name("AC/DC: Live") → "ac⧸dc꞉ live.m3u"
/// ```
pub fn playlist_file_name(name: &str) -> String {
    format!("{}.m3u", sanitize_filename(&name.to_lowercase()))
}

/// Replace filesystem-unsafe characters and trim surrounding whitespace
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' => '⧸',  // U+29F8 Big Solidus
            '\\' => '⧹', // U+29F9 Big Reverse Solidus
            ':' => '꞉',  // U+A789 Modifier Letter Colon
            '*' => '⁎',  // U+204E Low Asterisk
            '?' => '？', // U+FF1F Fullwidth Question Mark
            '"' => '″',  // U+2033 Double Prime
            '<' => '‹',  // U+2039
            '>' => '›',  // U+203A
            '|' => '｜', // U+FF5C Fullwidth Vertical Line
            c if c.is_control() => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
