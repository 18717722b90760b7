//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SarissaArgs};
use crate::error::Result;

/// A command result that can also be rendered for people.
pub trait HumanOutput {
    /// Render the result as plain text.
    fn to_human(&self) -> String;
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub language: String,
    pub token_count: usize,
    pub stems: Vec<String>,
}

impl HumanOutput for TokenizeResult {
    fn to_human(&self) -> String {
        self.stems.join("\n")
    }
}

/// One stemmed word.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemPair {
    pub word: String,
    pub stem: String,
}

/// Result structure for stemming.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResult {
    pub language: String,
    pub stems: Vec<StemPair>,
}

impl HumanOutput for StemResult {
    fn to_human(&self) -> String {
        let width = self
            .stems
            .iter()
            .map(|pair| pair.word.chars().count())
            .max()
            .unwrap_or(0);

        self.stems
            .iter()
            .map(|pair| {
                let padding = width - pair.word.chars().count();
                format!("{}{} → {}", pair.word, " ".repeat(padding), pair.stem)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A supported language.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub code: String,
    pub stop_words: usize,
}

/// Result structure for the language listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageList {
    pub languages: Vec<LanguageInfo>,
}

impl HumanOutput for LanguageList {
    fn to_human(&self) -> String {
        let mut lines = vec![
            "Supported Languages:".to_string(),
            "════════════════════".to_string(),
        ];
        for info in &self.languages {
            lines.push(format!(
                "{:<12} {}  ({} stop words)",
                info.name, info.code, info.stop_words
            ));
        }
        lines.join("\n")
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SarissaArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let rendered = render(message, result, args)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Render a result without printing it.
pub fn render<T>(message: &str, result: &T, args: &SarissaArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => Ok(render_human(message, result, args)),
        OutputFormat::Json => render_json(result, args),
    }
}

/// Render in human-readable format.
fn render_human<T: HumanOutput>(message: &str, result: &T, args: &SarissaArgs) -> String {
    let body = result.to_human();
    if args.verbosity() > 1 {
        format!("{message}\n\n{body}")
    } else {
        body
    }
}

/// Render in JSON format.
fn render_json<T: Serialize>(result: &T, args: &SarissaArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> SarissaArgs {
        let mut argv = vec!["sarissa-analysis"];
        argv.extend_from_slice(extra);
        argv.push("languages");
        SarissaArgs::try_parse_from(argv).unwrap()
    }

    fn tokenize_result() -> TokenizeResult {
        TokenizeResult {
            language: "english".to_string(),
            token_count: 2,
            stems: vec!["bake".to_string(), "cake".to_string()],
        }
    }

    #[test]
    fn test_human_output() {
        let rendered = render("Tokenized", &tokenize_result(), &args(&[])).unwrap();
        assert_eq!(rendered, "bake\ncake");

        let rendered = render("Tokenized", &tokenize_result(), &args(&["-v"])).unwrap();
        assert_eq!(rendered, "Tokenized\n\nbake\ncake");
    }

    #[test]
    fn test_json_output() {
        let rendered = render("Tokenized", &tokenize_result(), &args(&["-f", "json"])).unwrap();
        assert_eq!(
            rendered,
            r#"{"language":"english","token_count":2,"stems":["bake","cake"]}"#
        );

        let pretty =
            render("Tokenized", &tokenize_result(), &args(&["-f", "json", "--pretty"])).unwrap();
        assert!(pretty.contains("\n  \"language\": \"english\""));
    }

    #[test]
    fn test_stem_result_alignment() {
        let result = StemResult {
            language: "swedish".to_string(),
            stems: vec![
                StemPair {
                    word: "jemförelser".to_string(),
                    stem: "jemför".to_string(),
                },
                StemPair {
                    word: "hus".to_string(),
                    stem: "hus".to_string(),
                },
            ],
        };

        let lines: Vec<_> = result.to_human().lines().map(str::to_string).collect();
        assert_eq!(lines[0], "jemförelser → jemför");
        assert_eq!(lines[1], format!("hus{}→ hus", " ".repeat(9)));
    }
}
