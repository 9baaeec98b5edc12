//! Lexicon-based sentiment classification for article summaries.

use newsbrief_core::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Stateless VADER sentiment service.
///
/// Construct once and share; classification never mutates the analyzer.
pub struct SentimentClassifier {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// VADER compound polarity in `[-1.0, 1.0]`. Empty text scores `0.0`.
    #[must_use]
    pub fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }

    /// Label text as positive (`>= 0.05`), negative (`<= -0.05`), or neutral.
    #[must_use]
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_compound(self.compound(text))
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
