//! Fetch a video's subtitles and print the transcript.
//!
//! Usage: BIBIGPT_API_KEY=... cargo run --example basic -- https://www.bilibili.com/video/BV1PC4y1E769

#[tokio::main]
async fn main() -> subfetch::Result<()> {
    let url = std::env::args()
        .nth(1)
        .expect("usage: basic <video-url>");
    let key = std::env::var("BIBIGPT_API_KEY").unwrap_or_default();

    let options = subfetch::FetchOptions::new().video_url(&url).api_key(&key);
    let transcript = subfetch::fetch_transcript(&options).await?;

    println!("{}", transcript.to_text());

    Ok(())
}
