use anyhow::Context;
use quiz_config::QuizConfig;

/// Load `.env` from the working directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<QuizConfig> {
    if let Err(error) = dotenvy::dotenv()
        && !error.not_found()
    {
        return Err(error).context("failed to load .env file");
    }

    QuizConfig::load().context("failed to load quizlint configuration")
}
