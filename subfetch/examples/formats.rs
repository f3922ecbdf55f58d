//! Output a transcript as text lines and as JSON.
//!
//! Usage: BIBIGPT_API_KEY=... cargo run --example formats -- https://www.bilibili.com/video/BV1PC4y1E769

#[tokio::main]
async fn main() -> subfetch::Result<()> {
    let url = std::env::args()
        .nth(1)
        .expect("usage: formats <video-url>");
    let key = std::env::var("BIBIGPT_API_KEY").unwrap_or_default();

    let options = subfetch::FetchOptions::new()
        .video_url(&url)
        .api_key(&key)
        .progress(true);
    let transcript = subfetch::fetch_transcript(&options).await?;

    println!("=== Text ===\n{}", transcript.to_text());
    println!("=== JSON ===\n{}", transcript.to_json_pretty()?);

    Ok(())
}
