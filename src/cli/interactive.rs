use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::entities::label::LabelPipeline;
use crate::error::MedGuideError;
use crate::render;

const BANNER: &str = "medguide interactive — type to list matching drug names.\n\
Commands: `get <name>` fetches instructions, `clear` resets caches, `quit` exits.\n\n";

/// Stdin/stdout prompt loop over one long-lived pipeline, so repeated
/// inputs within a session hit the memo caches.
pub(crate) async fn run(mut pipeline: LabelPipeline) -> Result<(), MedGuideError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(BANNER.as_bytes()).await?;
    loop {
        stdout.write_all(b"drug> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        match input {
            "quit" | "exit" => break,
            "clear" => {
                pipeline.clear_caches();
                stdout.write_all(b"Caches cleared.\n").await?;
                continue;
            }
            _ => {}
        }

        let output = if let Some(name) = input.strip_prefix("get ") {
            let name = name.trim();
            match pipeline.fetch_record(name).await {
                Some(record) => render::markdown::render_label(name, &record)?,
                None => render::markdown::render_no_record(name),
            }
        } else {
            let candidates = pipeline.resolve_candidates(input).await;
            render::markdown::render_suggestions(input, &candidates)?
        };

        stdout.write_all(output.as_bytes()).await?;
        if !output.ends_with('\n') {
            stdout.write_all(b"\n").await?;
        }
    }

    Ok(())
}
