use crate::core::{Demo, PatternKind, Result, Transcript};
use crate::utils::error::PatternError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Word,
    Excel,
    PowerPoint,
    Wps,
    Text,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Word => "Word",
            FileType::Excel => "Excel",
            FileType::PowerPoint => "PowerPoint",
            FileType::Wps => "Wps",
            FileType::Text => "Text",
        };
        f.write_str(name)
    }
}

impl FromStr for FileType {
    type Err = PatternError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(FileType::Word),
            "excel" => Ok(FileType::Excel),
            "powerpoint" => Ok(FileType::PowerPoint),
            "wps" => Ok(FileType::Wps),
            "text" => Ok(FileType::Text),
            _ => Err(PatternError::UnsupportedVariant {
                kind: "file type".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

pub trait FileConvertor: Send + Sync {
    fn source(&self) -> FileType;

    fn convert(&self, file: &str) -> String {
        format!("Converting {} from {} to PDF", file, self.source())
    }
}

pub struct WordToPdfConvertor;
pub struct ExcelToPdfConvertor;
pub struct PowerPointToPdfConvertor;
pub struct WpsToPdfConvertor;

impl FileConvertor for WordToPdfConvertor {
    fn source(&self) -> FileType {
        FileType::Word
    }
}

impl FileConvertor for ExcelToPdfConvertor {
    fn source(&self) -> FileType {
        FileType::Excel
    }
}

impl FileConvertor for PowerPointToPdfConvertor {
    fn source(&self) -> FileType {
        FileType::PowerPoint
    }
}

impl FileConvertor for WpsToPdfConvertor {
    fn source(&self) -> FileType {
        FileType::Wps
    }
}

/// Simple factory: one function decides the concrete convertor.
pub fn pdf_convertor(file_type: FileType) -> Result<Box<dyn FileConvertor>> {
    match file_type {
        FileType::Word => Ok(Box::new(WordToPdfConvertor)),
        FileType::Excel => Ok(Box::new(ExcelToPdfConvertor)),
        FileType::PowerPoint => Ok(Box::new(PowerPointToPdfConvertor)),
        FileType::Wps => Ok(Box::new(WpsToPdfConvertor)),
        unsupported => Err(PatternError::UnsupportedVariant {
            kind: "convertor".to_string(),
            name: unsupported.to_string(),
        }),
    }
}

pub struct SimpleFactoryDemo;

#[async_trait::async_trait]
impl Demo for SimpleFactoryDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::SimpleFactory
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());

        let requests = [("Word", "example.docx"), ("Wps", "example.wps"), ("Text", "notes.txt")];
        for (name, file) in requests {
            match name.parse::<FileType>().and_then(pdf_convertor) {
                Ok(convertor) => transcript.line(convertor.convert(file)),
                Err(e) => transcript.line(format!("Rejected: {}", e)),
            }
        }

        Ok(transcript)
    }
}
