use crate::{
    errors::AppError,
    mcp::{
        types::{CallResponse, Envelope},
        Dispatcher,
    },
};
use futures::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_stream::wrappers::SplitStream;

/// Serves newline-delimited JSON envelopes on stdin/stdout until stdin closes.
pub async fn serve(dispatcher: Dispatcher) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    tracing::info!("stdio transport ready");
    serve_io(dispatcher, stdin, stdout).await
}

pub async fn serve_io<R, W>(dispatcher: Dispatcher, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = SplitStream::new(input.split(b'\n'));
    while let Some(raw) = lines.next().await {
        let response = match String::from_utf8(raw?) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => respond_line(&dispatcher, &line).await,
            // A bad frame is answered; the transport stays up.
            Err(e) => CallResponse::err(String::new(), &AppError::InvalidParams(format!("request is not UTF-8: {e}"))),
        };
        let mut frame = serde_json::to_vec(&response)?;
        frame.push(b'\n');
        output.write_all(&frame).await?;
        output.flush().await?;
    }
    Ok(())
}

async fn respond_line(dispatcher: &Dispatcher, line: &str) -> CallResponse {
    match serde_json::from_str::<Envelope>(line) {
        Ok(env) => dispatcher.respond(env).await,
        Err(e) => {
            let id = serde_json::from_str::<serde_json::Value>(line)
                .ok()
                .and_then(|v| v.get("id").and_then(|id| id.as_str()).map(str::to_string))
                .unwrap_or_default();
            CallResponse::err(id, &AppError::InvalidParams(e.to_string()))
        }
    }
}
