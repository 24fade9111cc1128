//! Interactive prompt with a bounded retry loop

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::app::TrimInteractor;
use crate::domain::model::{TrimMode, TrimRequest, TrimResponse};

/// Prompts for interval text until a request succeeds or attempts run out
pub struct PromptLoop<'a> {
    interactor: &'a TrimInteractor,
    max_attempts: u32,
}

impl<'a> PromptLoop<'a> {
    pub fn new(interactor: &'a TrimInteractor, max_attempts: u32) -> Self {
        Self {
            interactor,
            max_attempts: max_attempts.max(1),
        }
    }

    fn prompt_text(mode: TrimMode) -> String {
        format!(
            "Intervals to {} (e.g. \"(2:30-3:00)(1:22:30-1:23:00)\"): ",
            mode
        )
    }

    /// Run the loop.
    ///
    /// `template` supplies everything but the interval text. Engine errors are
    /// reported on `output` and the user is asked again; end of input and
    /// running out of attempts are errors.
    pub async fn run<R, W>(
        &self,
        template: TrimRequest,
        mut input: R,
        mut output: W,
    ) -> Result<TrimResponse>
    where
        R: BufRead,
        W: Write,
    {
        for attempt in 1..=self.max_attempts {
            write!(output, "{}", Self::prompt_text(template.mode))?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read intervals")?;
            if read == 0 {
                bail!("No intervals entered");
            }

            let request = TrimRequest {
                intervals_text: line.trim().to_string(),
                ..template.clone()
            };

            match self.interactor.execute(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    warn!(attempt, "Request failed: {}", e);
                    writeln!(output, "An error occurred: {}. {}", e, e.hint())?;
                    if attempt < self.max_attempts {
                        writeln!(
                            output,
                            "Please try again ({} attempt(s) left).",
                            self.max_attempts - attempt
                        )?;
                    }
                }
            }
        }

        bail!("Giving up after {} failed attempt(s)", self.max_attempts)
    }
}
