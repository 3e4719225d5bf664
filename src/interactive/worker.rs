//! Background loading for the TUI
//!
//! Target words and the dictionary are fetched off the UI thread. Every
//! target request carries the [`SessionId`] it was made for; the reply echoes
//! it back so the session can drop answers that arrive after a reset.

use crate::core::Word;
use crate::game::SessionId;
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{CorpusError, WordSource};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use tracing::{debug, warn};

/// Where the validity checker gets its words
#[derive(Debug, Clone)]
pub enum DictionarySource {
    /// Use these words
    Words(Vec<Word>),
    /// Load from a file, one word per line
    File { path: PathBuf, length: usize },
    /// No dictionary; every word is accepted
    Disabled,
}

/// Message from the background threads
#[derive(Debug)]
pub enum Reply {
    Target(SessionId, Result<Word, CorpusError>),
    Dictionary(Result<Vec<Word>, String>),
}

/// Handle to the loader threads
pub struct Loader {
    requests: Sender<SessionId>,
    replies: Receiver<Reply>,
}

impl Loader {
    /// Spawn the target picker and, unless disabled, the dictionary loader
    pub fn spawn<S>(mut source: S, dictionary: DictionarySource) -> Self
    where
        S: WordSource + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<SessionId>();
        let (reply_tx, reply_rx) = mpsc::channel();

        let target_tx = reply_tx.clone();
        thread::spawn(move || {
            // Ends when the UI drops its request sender
            while let Ok(session) = request_rx.recv() {
                debug!(%session, "picking target word");
                let word = source.random_word();
                if target_tx.send(Reply::Target(session, word)).is_err() {
                    break;
                }
            }
        });

        match dictionary {
            DictionarySource::Disabled => {}
            DictionarySource::Words(words) => {
                let _ = reply_tx.send(Reply::Dictionary(Ok(words)));
            }
            DictionarySource::File { path, length } => {
                thread::spawn(move || {
                    let result = load_from_file(&path, length).map_err(|err| {
                        warn!(path = %path.display(), %err, "failed to load dictionary");
                        format!("{}: {err}", path.display())
                    });
                    let _ = reply_tx.send(Reply::Dictionary(result));
                });
            }
        }

        Self {
            requests: request_tx,
            replies: reply_rx,
        }
    }

    /// Ask for a target word for `session`
    pub fn request_target(&self, session: SessionId) {
        if self.requests.send(session).is_err() {
            warn!(%session, "target loader has stopped");
        }
    }

    /// Collect every reply that has arrived so far
    pub fn drain(&self) -> Vec<Reply> {
        let mut replies = Vec::new();
        loop {
            match self.replies.try_recv() {
                Ok(reply) => replies.push(reply),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        replies
    }

    /// Block until the next reply (used by tests)
    #[cfg(test)]
    pub fn recv(&self) -> Option<Reply> {
        self.replies
            .recv_timeout(std::time::Duration::from_secs(5))
            .ok()
    }
}
