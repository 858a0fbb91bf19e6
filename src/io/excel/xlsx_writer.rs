/*
Copyright (c) 2023 Collin Ogren

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::path::{Path, PathBuf};
use rust_xlsxwriter::{ColNum, Format, FormatAlign, Workbook, XlsxError};
use crate::benchmark::ComparisonReport;
use crate::errors::{LeaderboardError, Result};
use crate::file_utils;
use crate::settings::Settings;

pub fn create_xlsx(report: &ComparisonReport, settings: &Settings) -> Result<PathBuf> {
    let path = settings.xlsx_path();
    let xlsx_error = |source: XlsxError| LeaderboardError::Xlsx { path: path.clone(), source };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_print_gridlines(true);
    for (column, width) in settings.xlsx_column_widths.iter().enumerate() {
        if *width > 0 { // Use negative value to not set the width.
            worksheet.set_column_width(column as ColNum, *width).map_err(xlsx_error)?;
        }
    }

    let text_format = Format::new().set_font_size(settings.xlsx_font_size).set_align(FormatAlign::Center);
    let time_format = text_format.clone().set_num_format("0.000");
    let bar_format = text_format.clone().set_num_format("0");

    for (column, value) in settings.xlsx_header_cell_values.iter().enumerate() {
        worksheet.write_with_format(0, column as ColNum, value.as_str(), &text_format).map_err(xlsx_error)?;
    }

    for (i, (name, elapsed_ms, complexity, bar)) in rows(report, settings.bar_width).enumerate() {
        let row = i as u32 + 1;
        worksheet.write_with_format(row, 0, name, &text_format).map_err(xlsx_error)?;
        worksheet.write_with_format(row, 1, elapsed_ms, &time_format).map_err(xlsx_error)?;
        worksheet.write_with_format(row, 2, complexity, &text_format).map_err(xlsx_error)?;
        worksheet.write_with_format(row, 3, bar as f64, &bar_format).map_err(xlsx_error)?;
    }

    file_utils::check_and_create_dir(Path::new(&settings.output_directory))?;

    let free_path = first_free_path(&path);
    workbook.save(&free_path).map_err(|source| LeaderboardError::Xlsx { path: free_path.clone(), source })?;
    tracing::info!("Comparison workbook saved to {}", free_path.display());

    Ok(free_path)
}

// Name, time (ms), complexity and bar length per algorithm, in report order.
fn rows(report: &ComparisonReport, bar_width: usize) -> impl Iterator<Item = (&'static str, f64, &'static str, usize)> + '_ {
    report
        .iter()
        .map(move |r| (r.algorithm().name(), r.elapsed_ms(), r.complexity(), report.bar_length(r, bar_width)))
}

// Never overwrite an earlier workbook: name.xlsx, name(1).xlsx, name(2).xlsx, ...
fn first_free_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();

    let mut candidate = path.to_path_buf();
    let mut i = 1;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{}({}).xlsx", stem, i));
        i += 1;
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::compare_all;
    use crate::player::Player;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            output_directory: dir.to_string_lossy().into_owned(),
            generate_xlsx: true,
            ..Settings::default()
        }
    }

    #[test]
    fn test_first_free_path_counts_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.xlsx");
        assert_eq!(first_free_path(&path), path);

        std::fs::write(&path, "").unwrap();
        assert_eq!(first_free_path(&path), dir.path().join("comparison(1).xlsx"));

        std::fs::write(dir.path().join("comparison(1).xlsx"), "").unwrap();
        assert_eq!(first_free_path(&path), dir.path().join("comparison(2).xlsx"));
    }

    #[test]
    fn test_rows_carry_bar_length() {
        let players: Vec<Player> = (0..200).map(|i| Player::new(&format!("p{}", i), i).unwrap()).collect();
        let report = compare_all(&players);

        let rows: Vec<_> = rows(&report, 40).collect();
        assert_eq!(rows.len(), 7);
        for ((name, elapsed_ms, complexity, bar), result) in rows.iter().zip(report.iter()) {
            assert_eq!(*name, result.algorithm().name());
            assert_eq!(*elapsed_ms, result.elapsed_ms());
            assert_eq!(*complexity, result.complexity());
            assert_eq!(*bar, report.bar_length(result, 40));
            assert!(*bar <= 40);
        }
        let slowest = rows.iter().map(|row| row.3).max().unwrap();
        assert!(slowest == 40 || report.max_elapsed() == 1.0);
    }

    #[test]
    fn test_create_xlsx_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let report = compare_all(&[Player::new("Alice", 50).unwrap(), Player::new("Bob", 80).unwrap()]);

        let first = create_xlsx(&report, &settings).unwrap();
        let second = create_xlsx(&report, &settings).unwrap();

        assert_eq!(first, dir.path().join("comparison.xlsx"));
        assert_eq!(second, dir.path().join("comparison(1).xlsx"));
        assert!(first.exists() && second.exists());
    }
}
