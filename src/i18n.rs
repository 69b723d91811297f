//! Static bilingual label table (English / Indonesian).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Id => &ID,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every user-visible label, per language.
#[derive(Debug)]
pub struct Strings {
    pub language_label: &'static str,
    pub title: &'static str,
    pub sidebar_title: &'static str,
    pub upload_label: &'static str,
    pub browse: &'static str,
    pub drop_hint: &'static str,
    pub loaded_file: &'static str,
    pub desc_header: &'static str,
    pub assoc_header: &'static str,
    pub show_data: &'static str,
    pub dimensions: &'static str,
    pub rows: &'static str,
    pub columns: &'static str,
    pub stats: &'static str,
    pub cat_dist: &'static str,
    pub num_dist: &'static str,
    pub corr_matrix: &'static str,
    pub crosstab: &'static str,
    pub select_col_x: &'static str,
    pub select_col_y: &'static str,
    pub count_axis: &'static str,
    pub no_data: &'static str,
    pub welcome: &'static str,
    pub success: &'static str,
    pub warning_unique: &'static str,
    pub load_error: &'static str,
    pub no_categorical: &'static str,
    pub no_numeric: &'static str,
    pub no_values: &'static str,
    pub no_summary: &'static str,
    pub need_two_numeric: &'static str,
    pub need_two_categorical: &'static str,
    pub pick_different: &'static str,
}

impl Strings {
    /// `"Dimensions: 120 Rows, 9 Columns"`
    pub fn dimensions_line(&self, rows: usize, columns: usize) -> String {
        format!(
            "{}: {rows} {}, {columns} {}",
            self.dimensions, self.rows, self.columns
        )
    }
}

pub static EN: Strings = Strings {
    language_label: "Language / Bahasa",
    title: "✨ Survey Data Analysis Tool ✨",
    sidebar_title: "⚙️ Configuration",
    upload_label: "📂 Upload Data (CSV/Excel)",
    browse: "Browse files",
    drop_hint: "…or drop a .csv / .xlsx file onto the window",
    loaded_file: "Loaded",
    desc_header: "📊 Descriptive Analysis",
    assoc_header: "🔗 Association Analysis",
    show_data: "👀 Raw Data Preview (All Rows)",
    dimensions: "Dimensions",
    rows: "Rows",
    columns: "Columns",
    stats: "📈 Descriptive Statistics",
    cat_dist: "Bar Chart (Categorical)",
    num_dist: "Histogram (Numerical)",
    corr_matrix: "❤️ Correlation Matrix",
    crosstab: "🧩 Cross-Tabulation (Heatmap)",
    select_col_x: "👉 Select Column X",
    select_col_y: "👉 Select Column Y",
    count_axis: "count",
    no_data: "👋 Please upload a dataset to begin!",
    welcome: "Welcome! Let's analyze your data easily.",
    success: "Yippii! File uploaded & Cleaned successfully :b 🎈",
    warning_unique: "⚠️ Columns with too many unique values (Names, Emails) are hidden to prevent errors.",
    load_error: "Error reading file",
    no_categorical: "No categorical data available.",
    no_numeric: "No numerical data.",
    no_values: "This column has no values to plot.",
    no_summary: "No columns to summarise.",
    need_two_numeric: "Need 2+ numerical columns for correlation.",
    need_two_categorical: "Need 2+ valid categorical columns.",
    pick_different: "Pick different columns.",
};

pub static ID: Strings = Strings {
    language_label: "Language / Bahasa",
    title: "✨ Alat Analisis Data Survei ✨",
    sidebar_title: "⚙️ Konfigurasi",
    upload_label: "📂 Unggah Data (CSV/Excel)",
    browse: "Pilih file",
    drop_hint: "…atau seret file .csv / .xlsx ke jendela",
    loaded_file: "Dimuat",
    desc_header: "📊 Analisis Deskriptif",
    assoc_header: "🔗 Analisis Asosiasi",
    show_data: "👀 Pratinjau Data (Semua Baris)",
    dimensions: "Dimensi",
    rows: "Baris",
    columns: "Kolom",
    stats: "📈 Statistik Deskriptif",
    cat_dist: "Diagram Batang (Kategorikal)",
    num_dist: "Histogram (Numerik)",
    corr_matrix: "❤️ Matriks Korelasi",
    crosstab: "🧩 Tabulasi Silang (Heatmap)",
    select_col_x: "👉 Pilih Kolom X",
    select_col_y: "👉 Pilih Kolom Y",
    count_axis: "jumlah",
    no_data: "👋 Silakan unggah dataset untuk memulai!",
    welcome: "Selamat Datang! Mari analisis data dengan mudah.",
    success: "Yippii! File berhasil diunggah & Dibersihkan ;B 🎈",
    warning_unique: "⚠️ Kolom dengan terlalu banyak nilai unik (Nama, Email) disembunyikan agar grafik bagus.",
    load_error: "Gagal membaca file",
    no_categorical: "Tidak ada data kategorikal.",
    no_numeric: "Tidak ada data numerik.",
    no_values: "Kolom ini tidak memiliki nilai untuk digambar.",
    no_summary: "Tidak ada kolom untuk diringkas.",
    need_two_numeric: "Butuh 2+ kolom numerik untuk korelasi.",
    need_two_categorical: "Butuh 2+ kolom kategorikal yang valid.",
    pick_different: "Pilih kolom yang berbeda.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_has_its_own_table() {
        assert_eq!(Language::En.strings().title, "✨ Survey Data Analysis Tool ✨");
        assert_eq!(Language::Id.strings().title, "✨ Alat Analisis Data Survei ✨");
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn selector_shows_codes() {
        let codes: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(codes, vec!["EN", "ID"]);
    }

    #[test]
    fn dimensions_line_is_localized() {
        assert_eq!(EN.dimensions_line(3, 2), "Dimensions: 3 Rows, 2 Columns");
        assert_eq!(ID.dimensions_line(3, 2), "Dimensi: 3 Baris, 2 Kolom");
    }

    #[test]
    fn no_label_is_blank() {
        for lang in Language::ALL {
            let s = lang.strings();
            for label in [
                s.title,
                s.upload_label,
                s.no_data,
                s.load_error,
                s.no_categorical,
                s.no_numeric,
                s.need_two_numeric,
                s.need_two_categorical,
                s.pick_different,
                s.success,
            ] {
                assert!(!label.trim().is_empty(), "{lang}: blank label");
            }
        }
    }
}
