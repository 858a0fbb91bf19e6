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

use std::fs;
use std::path::{Path, PathBuf};
use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_PATH: &str = "./settings/settings.toml";

#[derive(Clone, Debug, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub(crate) players_file: String,
    pub(crate) output_directory: String,
    pub(crate) leaderboard_file_name: String,
    pub(crate) comparison_file_name: String,
    pub(crate) bar_width: usize,
    pub(crate) save_ranked_results: bool, //Append every ranking that is shown to the leaderboard file.
    pub(crate) generate_xlsx: bool,
    pub(crate) xlsx_file_name: String,
    pub(crate) xlsx_header_cell_values: Vec<String>,
    pub(crate) xlsx_column_widths: Vec<i32>,
    pub(crate) xlsx_font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players_file: String::from("players.csv"),
            output_directory: String::from("./"),
            leaderboard_file_name: String::from("leaderboard.csv"),
            comparison_file_name: String::from("comparison.csv"),
            bar_width: 40,
            save_ranked_results: true,
            generate_xlsx: false,
            xlsx_file_name: String::from("comparison.xlsx"),
            xlsx_header_cell_values: vec![String::from("Algorithm"), String::from("Time (ms)"), String::from("Complexity"), String::from("Bar Length")],
            xlsx_column_widths: vec![20, 15, 55, 45],
            xlsx_font_size: 12,
        }
    }
}

impl Settings {
    pub fn read_settings() -> Self {
        Self::read_settings_from(Path::new(DEFAULT_SETTINGS_PATH))
    }

    // Writes the defaults out on first run so the file can be edited by hand.
    pub fn read_settings_from(settings_path: &Path) -> Self {
        if !settings_path.exists() {
            if let Some(parent) = settings_path.parent() {
                if let Err(err) = fs::create_dir_all(parent) {
                    tracing::warn!("Failed to create settings directory {}: {}", parent.display(), err);
                }
            }
            match toml::to_string(&Settings::default()) {
                Ok(toml) => {
                    if let Err(err) = fs::write(settings_path, toml) {
                        tracing::warn!("Failed to write to {}: {}", settings_path.display(), err);
                    }
                }
                Err(err) => tracing::warn!("Failed to serialize default settings: {}", err),
            };
        }

        let contents = match fs::read_to_string(settings_path) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!("Failed to read settings file: {}. Using default values.", err);
                return Settings::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!("Failed to parse settings file: {}. Using default values.", err);
                Settings::default()
            }
        }
    }

    pub fn players_path(&self) -> PathBuf {
        PathBuf::from(&self.players_file)
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        Path::new(&self.output_directory).join(&self.leaderboard_file_name)
    }

    pub fn comparison_path(&self) -> PathBuf {
        Path::new(&self.output_directory).join(&self.comparison_file_name)
    }

    pub fn xlsx_path(&self) -> PathBuf {
        Path::new(&self.output_directory).join(&self.xlsx_file_name)
    }
}
