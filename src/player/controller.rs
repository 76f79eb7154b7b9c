use super::{PlaybackState, Player, PlayerCommand, PlayerState};
use crate::domain::Track;
use anyhow::{Result, anyhow};
use std::{
    sync::{
        Arc, Mutex,
        mpsc::{self, Sender},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

/// Owns the player thread. Commands and the position poll are
/// serialized on that one thread; everyone else only reads snapshots
/// through the shared state.
pub struct PlayerController {
    sender: Sender<PlayerCommand>,
    shared_state: Arc<Mutex<PlayerState>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl PlayerController {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        let shared_state = Arc::new(Mutex::new(PlayerState::default()));
        let shared_state_clone = Arc::clone(&shared_state);

        let thread_handle = thread::spawn(move || {
            let mut player = Player::new(shared_state_clone);

            loop {
                if let Ok(message) = receiver.try_recv() {
                    match message {
                        PlayerCommand::Load(track) => {
                            if let Err(e) = player.load_track(&track) {
                                player.record_error(e);
                            }
                        }
                        PlayerCommand::TogglePlayback => {
                            if let Err(e) = player.toggle_playback() {
                                player.record_error(e);
                            }
                        }
                        PlayerCommand::SkipForward(secs) => {
                            if let Err(e) = player.skip_forward(secs) {
                                player.record_error(e);
                            }
                        }
                        PlayerCommand::SkipBack(secs) => {
                            if let Err(e) = player.skip_back(secs) {
                                player.record_error(e);
                            }
                        }
                        PlayerCommand::SeekTo(pos) => {
                            if let Err(e) = player.seek_to(pos) {
                                player.record_error(e);
                            }
                        }
                        PlayerCommand::Stop => player.stop(),
                        PlayerCommand::Shutdown => break,
                    };
                }

                player.finish_if_drained();
                player.update_elapsed();

                // Wake often for command latency; elapsed refreshes are
                // gated to the coarse poll interval separately.
                thread::sleep(Duration::from_millis(16))
            }
        });

        PlayerController {
            sender,
            shared_state,
            thread_handle: Some(thread_handle),
        }
    }

    pub fn load(&self, track: Arc<Track>) -> Result<()> {
        self.sender.send(PlayerCommand::Load(track))?;
        Ok(())
    }

    pub fn toggle_playback(&self) -> Result<()> {
        self.sender.send(PlayerCommand::TogglePlayback)?;
        Ok(())
    }

    pub fn skip_forward(&self, secs: u64) -> Result<()> {
        self.sender.send(PlayerCommand::SkipForward(secs))?;
        Ok(())
    }

    pub fn skip_back(&self, secs: u64) -> Result<()> {
        self.sender.send(PlayerCommand::SkipBack(secs))?;
        Ok(())
    }

    pub fn seek_to(&self, pos: Duration) -> Result<()> {
        self.sender.send(PlayerCommand::SeekTo(pos))?;
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        self.sender.send(PlayerCommand::Stop)?;
        Ok(())
    }

    /// Teardown contract: stop the loop (and with it the position
    /// poll) before the session is dropped.
    pub fn shutdown(&mut self) -> Result<()> {
        self.sender.send(PlayerCommand::Shutdown)?;
        if let Some(handle) = self.thread_handle.take() {
            handle
                .join()
                .map_err(|_| anyhow!("Player thread panicked during shutdown"))?;
        }
        Ok(())
    }

    pub fn get_track(&self) -> Option<Arc<Track>> {
        let state = self.shared_state.lock().unwrap();
        state.track.clone()
    }

    pub fn get_elapsed(&self) -> Duration {
        let state = self.shared_state.lock().unwrap();
        state.elapsed
    }

    pub fn is_paused(&self) -> bool {
        let state = self.shared_state.lock().unwrap();
        state.state == PlaybackState::Paused
    }

    pub fn get_shared_state(&self) -> Arc<Mutex<PlayerState>> {
        Arc::clone(&self.shared_state)
    }
}
