pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Human readable size using base 1024, e.g. `1536` -> `"1.5 KB"`.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

        if size == 0 {
            return "0 Bytes".to_string();
        }

        let mut value = size as f64;
        let mut unit_index = 0;

        while value >= 1024.0 && unit_index < UNITS.len() - 1 {
            value /= 1024.0;
            unit_index += 1;
        }

        let rounded = (value * 100.0).round() / 100.0;
        format!("{} {}", rounded, UNITS[unit_index])
    }
}
