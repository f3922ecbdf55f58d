use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use subfetch::config::{
    DEFAULT_AUDIO_LANGUAGE, DEFAULT_ENDPOINT, DEFAULT_VIDEO_URL,
};
use subfetch::{Error, FetchOptions, Transcript};

#[derive(Parser)]
#[command(name = "subfetch", about = "Fetch a video's subtitles into a timestamped transcript file")]
struct Cli {
    /// Video page URL to fetch subtitles for.
    #[arg(long, default_value = DEFAULT_VIDEO_URL)]
    video_url: String,

    /// BibiGPT API key, sent as a bearer token.
    #[arg(long, env = "BIBIGPT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Spoken-language hint for the API.
    #[arg(short, long, default_value = DEFAULT_AUDIO_LANGUAGE)]
    language: String,

    /// Subtitle API endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value = "120")]
    timeout: u64,

    /// Output file (default: transcript file next to the executable).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Hide the progress spinner.
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Exit code for a well-formed response without subtitles.
const EXIT_UNEXPECTED_RESPONSE: u8 = 1;
/// Exit code for transport, decode, configuration and write failures.
const EXIT_FAILURE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("subfetch=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                Error::UnexpectedResponse { body } => println!("Unexpected API response: {body}"),
                other => eprintln!("Error: {other}"),
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(error: &Error) -> u8 {
    if error.is_unexpected_response() {
        EXIT_UNEXPECTED_RESPONSE
    } else {
        EXIT_FAILURE
    }
}

async fn run(cli: Cli) -> subfetch::Result<()> {
    let mut opts = FetchOptions::new()
        .endpoint(&cli.endpoint)
        .video_url(&cli.video_url)
        .audio_language(&cli.language)
        .progress(!cli.quiet)
        .timeout(Duration::from_secs(cli.timeout))?;
    if let Some(key) = &cli.api_key {
        opts = opts.api_key(key);
    }

    let transcript = subfetch::fetch_transcript(&opts).await?;

    let output_text = render(&transcript, &cli.format)?;
    let path = subfetch::output::resolve_output_path(cli.output)?;
    subfetch::output::write_output(&path, &output_text)?;

    println!("Transcript saved to: {}", path.display());
    println!("{} subtitle entries", transcript.len());
    Ok(())
}

fn render(transcript: &Transcript, format: &OutputFormat) -> subfetch::Result<String> {
    match format {
        OutputFormat::Text => Ok(transcript.to_text()),
        OutputFormat::Json => transcript.to_json_pretty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    fn serve_once(body: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (format!("http://{addr}/api/v1/getSubtitle"), handle)
    }

    fn temp_output(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("subfetch-cli-{}-{name}", std::process::id()));
        std::fs::remove_file(&path).ok();
        path
    }

    fn cli_for(endpoint: &str, output: &std::path::Path) -> Cli {
        Cli::try_parse_from([
            "subfetch",
            "--api-key",
            "k",
            "--quiet",
            "--endpoint",
            endpoint,
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["subfetch", "--api-key", "k"]).unwrap();
        assert_eq!(cli.video_url, DEFAULT_VIDEO_URL);
        assert_eq!(cli.language, "zh");
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.timeout, 120);
        assert!(cli.output.is_none());
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_render_text_and_json() {
        let transcript = Transcript {
            source_url: DEFAULT_VIDEO_URL.into(),
            language: "zh".into(),
            entries: vec![subfetch::SubtitleEntry {
                start_time: 3725.9,
                text: "结尾".into(),
            }],
        };
        assert_eq!(render(&transcript, &OutputFormat::Text).unwrap(), "[01:02:05] 结尾");
        assert!(render(&transcript, &OutputFormat::Json)
            .unwrap()
            .contains("\"startTime\": 3725.9"));
    }

    #[tokio::test]
    async fn test_run_zero_timeout_is_invalid_option() {
        let cli = Cli::try_parse_from(["subfetch", "--api-key", "k", "--timeout", "0"]).unwrap();
        assert!(matches!(run(cli).await, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_exit_code_mapping() {
        let rejected = Error::UnexpectedResponse {
            body: Default::default(),
        };
        assert_eq!(exit_code(&rejected), 1);
        assert_eq!(exit_code(&Error::MissingApiKey), 2);
        assert_eq!(exit_code(&Error::InvalidOption("x".into())), 2);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(exit_code(&Error::Io(io)), 2);
    }

    #[tokio::test]
    async fn test_run_rejected_response_writes_no_file() {
        let output = temp_output("rejected.txt");
        let (endpoint, server) = serve_once(r#"{"success":false}"#);

        let result = run(cli_for(&endpoint, &output)).await;
        server.join().unwrap();

        assert!(matches!(result, Err(Error::UnexpectedResponse { .. })));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_run_writes_transcript_file() {
        let output = temp_output("accepted.txt");
        let (endpoint, server) = serve_once(
            r#"{"success":true,"detail":{"subtitlesArray":[{"startTime":0,"text":"开场"},{"startTime":3599,"text":"结尾"}]}}"#,
        );

        run(cli_for(&endpoint, &output)).await.unwrap();
        server.join().unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, "[00:00:00] 开场\n[00:59:59] 结尾");
        std::fs::remove_file(&output).ok();
    }
}
