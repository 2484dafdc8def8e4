//! Line-oriented terminal front end over a [`SessionController`].

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tubechat_config::EmbedConfig;
use tubechat_core::{BackendClient, SessionController};

use crate::render;

/// One parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Quit,
    Reset,
    Empty,
    Text(&'a str),
}

impl<'a> Command<'a> {
    pub(crate) fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Command::Empty,
            "/quit" | "/exit" => Command::Quit,
            "/reset" | "/new" => Command::Reset,
            _ => Command::Text(line.trim_end_matches(['\r', '\n'])),
        }
    }
}

/// Run the interactive loop until `/quit` or end of input.
pub(crate) async fn run(
    mut session: SessionController,
    backend: &dyn BackendClient,
    embed: EmbedConfig,
    initial_url: Option<String>,
) -> tubechat_common::Result<()> {
    let renderer = tokio::spawn(render::render_events(session.subscribe(), embed));
    render::banner();

    if let Some(url) = initial_url {
        load_video(&mut session, backend, &url).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // Let the renderer print everything published so far.
        tokio::task::yield_now().await;
        render::prompt(session.phase());

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Reset => session.reset(),
            Command::Empty => {}
            Command::Text(text) if session.phase().is_chatting() => {
                session.conversation_mut().set_input(text);
                session.submit_input(backend).await;
            }
            Command::Text(text) => load_video(&mut session, backend, text).await,
        }
    }

    // Dropping the session closes the bus and ends the renderer.
    drop(session);
    if let Err(e) = renderer.await {
        debug!("renderer task ended abnormally: {e}");
    }
    Ok(())
}

async fn load_video(session: &mut SessionController, backend: &dyn BackendClient, url: &str) {
    // Rejections are shown through the ValidationFailed event.
    if let Err(e) = session.submit_video(backend, url).await {
        debug!(error = %e, "video rejected");
    }
}
