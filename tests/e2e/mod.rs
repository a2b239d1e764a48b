// End-to-end tests for the Speech Studio HTTP surface
//
// Each test starts the real router on an ephemeral port with fake
// collaborators:
// - a synthesizer that writes a small clip into a temporary audio directory
// - a media backend that records what it was asked to play
// - the real JWT auth provider, starting signed out
//
// Tests drive the server with a plain hyper client.

mod test_download;
mod test_events;
mod test_health;
mod test_playback;
