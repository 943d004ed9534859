//! Heatmap configuration: raw form input plus the validated shape the grid is built from.

use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Sıcaklık Haritası";
pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 12;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 50;

/// Validated configuration. Only ever produced by [`ConfigForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapConfig {
    pub title: String,
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Rows,
    Cols,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Başlık zorunludur.")]
    TitleRequired,
    #[error("Başlık en fazla {} karakter olabilir.", MAX_TITLE_CHARS)]
    TitleTooLong,
    #[error("{} zorunludur.", field_label(.0))]
    DimensionRequired(Field),
    #[error("{} tam sayı olmalıdır.", field_label(.0))]
    DimensionNotInteger(Field),
    #[error(
        "{} {} ile {} arasında olmalıdır.",
        field_label(.0),
        MIN_DIMENSION,
        MAX_DIMENSION
    )]
    DimensionOutOfRange(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::TitleRequired | FieldError::TitleTooLong => Field::Title,
            FieldError::DimensionRequired(field)
            | FieldError::DimensionNotInteger(field)
            | FieldError::DimensionOutOfRange(field) => *field,
        }
    }
}

fn field_label(field: &Field) -> &'static str {
    match field {
        Field::Title => "Başlık",
        Field::Rows => "Satır sayısı",
        Field::Cols => "Sütun sayısı",
    }
}

/// Form values exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForm {
    pub title: String,
    pub rows: String,
    pub cols: String,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            rows: DEFAULT_ROWS.to_string(),
            cols: DEFAULT_COLS.to_string(),
        }
    }
}

impl ConfigForm {
    pub fn validate(&self) -> Result<HeatmapConfig, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Err(err) = validate_title(&self.title) {
            errors.push(err);
        }
        let rows = parse_dimension(&self.rows, Field::Rows).map_err(|err| errors.push(err));
        let cols = parse_dimension(&self.cols, Field::Cols).map_err(|err| errors.push(err));

        match (rows, cols) {
            (Ok(rows), Ok(cols)) if errors.is_empty() => Ok(HeatmapConfig {
                title: self.title.clone(),
                rows,
                cols,
            }),
            _ => Err(errors),
        }
    }

    pub fn errors_for(&self, field: Field) -> Vec<FieldError> {
        match self.validate() {
            Ok(_) => Vec::new(),
            Err(errors) => errors.into_iter().filter(|e| e.field() == field).collect(),
        }
    }

    /// Dimensions currently in the form, if both parse within bounds.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        let rows = parse_dimension(&self.rows, Field::Rows).ok()?;
        let cols = parse_dimension(&self.cols, Field::Cols).ok()?;
        Some((rows, cols))
    }

    /// Title used for the chart and export filenames; falls back to the default when blank.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }
}

fn validate_title(title: &str) -> Result<(), FieldError> {
    if title.is_empty() {
        return Err(FieldError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(FieldError::TitleTooLong);
    }
    Ok(())
}

fn parse_dimension(raw: &str, field: Field) -> Result<usize, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::DimensionRequired(field));
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| FieldError::DimensionNotInteger(field))?;
    let value = usize::try_from(value).map_err(|_| FieldError::DimensionOutOfRange(field))?;
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(value)
    } else {
        Err(FieldError::DimensionOutOfRange(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, rows: &str, cols: &str) -> ConfigForm {
        ConfigForm {
            title: title.into(),
            rows: rows.into(),
            cols: cols.into(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = ConfigForm::default().validate().unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!((config.rows, config.cols), (8, 12));
    }

    #[test]
    fn empty_title_is_rejected() {
        let errors = form("", "4", "4").validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::TitleRequired]);
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let hundred = "ş".repeat(100);
        assert!(form(&hundred, "2", "2").validate().is_ok());

        let too_long = "a".repeat(101);
        let errors = form(&too_long, "2", "2").validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::TitleTooLong]);
    }

    #[test]
    fn dimension_bounds() {
        assert!(form("t", "1", "50").validate().is_ok());
        assert_eq!(
            form("t", "0", "3").errors_for(Field::Rows),
            vec![FieldError::DimensionOutOfRange(Field::Rows)]
        );
        assert_eq!(
            form("t", "3", "51").errors_for(Field::Cols),
            vec![FieldError::DimensionOutOfRange(Field::Cols)]
        );
        assert_eq!(
            form("t", "-2", "3").errors_for(Field::Rows),
            vec![FieldError::DimensionOutOfRange(Field::Rows)]
        );
    }

    #[test]
    fn non_integer_dimensions_are_rejected() {
        let errors = form("t", "2.5", "").validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::DimensionNotInteger(Field::Rows),
                FieldError::DimensionRequired(Field::Cols),
            ]
        );
    }

    #[test]
    fn display_title_falls_back_to_default() {
        assert_eq!(form("", "1", "1").display_title(), DEFAULT_TITLE);
        assert_eq!(form("Ofis", "1", "1").display_title(), "Ofis");
    }

    #[test]
    fn error_messages_name_the_field() {
        let msg = FieldError::DimensionOutOfRange(Field::Cols).to_string();
        assert_eq!(msg, "Sütun sayısı 1 ile 50 arasında olmalıdır.");
    }
}
