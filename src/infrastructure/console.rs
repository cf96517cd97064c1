use crate::domain::ports::{NativeBridge, UiHost};

/// UI host adapter that prints to stdout, used by the replay binary.
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl UiHost for ConsoleHost {
    fn show_message(&self, message: &str) {
        println!("[message] {message}");
    }

    fn show_progress(&self, message: &str) {
        println!("[progress] {message}");
    }

    fn dismiss_progress(&self) {
        println!("[progress] dismissed");
    }
}

/// Native-bridge adapter that prints the notifications the game layer would
/// have received.
#[derive(Debug, Default)]
pub struct ConsoleNativeBridge;

impl NativeBridge for ConsoleNativeBridge {
    fn purchase_did_complete(&self, product_id: &str) {
        println!("[native] purchaseDidComplete {product_id}");
    }

    fn purchase_did_complete_restoring(&self, message: &str) {
        println!("[native] purchaseDidCompleteRestoring {message}");
    }
}
