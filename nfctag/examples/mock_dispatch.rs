// Dispatch demo against scripted tags.
//
// Each tag is backed by a MockTransport replaying what a real card would
// answer, so the example runs without hardware. Set RUST_LOG=trace to see
// every frame.

use nfctag::prelude::*;
use nfctag::protocol::ndef::{NdefMessage, NdefRecord};
use nfctag::transport::MockTransport;

fn main() -> Result<()> {
    env_logger::init();
    let dispatcher = TagDispatcher::new();

    println!("=== NDEF text ===");
    let message = NdefMessage::single(NdefRecord::text("zh", "你好")?).encode()?;
    let mut tag = TagBuilder::new(Box::new(MockTransport::new()))
        .uid(&[0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
        .capability(nfctag::constants::TECH_NDEF)
        .ndef_message(message)
        .build()?;
    let body = dispatcher.read(&mut tag)?;
    println!("  {} -> {:?}", tag.uid().to_hex(), String::from_utf8_lossy(&body));

    println!("\n=== MIFARE Ultralight ===");
    let mut tag = TagBuilder::new(Box::new(MockTransport::with_responses(vec![vec![0x0A]; 12])))
        .uid(&[0x04, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF])
        .capability(nfctag::constants::TECH_MIFARE_ULTRALIGHT)
        .build()?;
    dispatcher.write_text(&mut tag, "中文标签")?;
    println!("  wrote GBK text to {}", tag.uid().to_hex());

    println!("\n=== Unknown technology ===");
    let mut tag = TagBuilder::new(Box::new(MockTransport::new()))
        .uid(&[0x01, 0x02, 0x03, 0x04])
        .capability("android.nfc.tech.NfcBarcode")
        .build()?;
    match dispatcher.read(&mut tag) {
        Ok(data) => println!("  unexpected data: {}", bytes_to_hex(&data)),
        Err(e) => println!("  {}", e),
    }

    Ok(())
}
