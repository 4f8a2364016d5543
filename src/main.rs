// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resource relay CLI
//!
//! Demonstrates the relay end to end against local files.

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use resource_relay::{
    mime, ChannelClients, FetchEvent, FileLoader, HttpClient, LocalHost, MemoryCacheStorage,
    PageResponder, RelayConfig, Request, ResourceUri, ResourceWorker, ResponderConfig,
    RESOURCE_PATH,
};

const DEMO_PAGE: &str = "demo-page";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resource_relay=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "get" => {
            if args.len() < 3 {
                eprintln!("Usage: resource-relay get <path> [--extension]");
                return ExitCode::from(1);
            }
            let extension = args.iter().skip(3).any(|a| a == "--extension");
            match get_resource(&args[2], extension).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Relay failed: {:#}", e);
                    ExitCode::from(1)
                }
            }
        }
        "mime" => {
            if args.len() < 3 {
                eprintln!("Usage: resource-relay mime <path>");
                return ExitCode::from(1);
            }
            println!("{}", mime::content_type_for_path(&args[2]));
            ExitCode::SUCCESS
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("resource-relay {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Resource Relay - serves page resources through a token-correlated relay

USAGE:
    resource-relay <COMMAND> [OPTIONS]

COMMANDS:
    get <path> [--extension]   Relay a local file through the worker twice
                               (--extension treats its folder as an extension
                               root, making the response cacheable)
    mime <path>                Show the content type the relay would use
    help                       Show this help message
    version                    Show version information

EXAMPLES:
    resource-relay get ./media/logo.png --extension
    resource-relay mime clip.webm
"#
    );
}

async fn get_resource(path: &str, extension: bool) -> anyhow::Result<()> {
    let path = tokio::fs::canonicalize(path)
        .await
        .with_context(|| format!("cannot resolve {}", path))?;
    let resource = ResourceUri::from_file_path(&path)?;

    let clients = ChannelClients::new();
    let page = clients.register(DEMO_PAGE);

    let worker = Arc::new(ResourceWorker::new(
        RelayConfig::default(),
        Arc::new(MemoryCacheStorage::new()),
        Arc::new(clients.clone()),
        Arc::new(HttpClient::new()?),
    ));

    let host = LocalHost::new(Arc::new(clients), true);
    worker.install(&host).await?;
    worker.activate(&host).await?;

    let mut responder_config = ResponderConfig::new();
    if extension {
        let root = path.parent().unwrap_or(Path::new("/"));
        responder_config = responder_config.extension_root(ResourceUri::from_file_path(root)?);
    }
    let responder = Arc::new(PageResponder::new(FileLoader, responder_config));
    let replies = Arc::clone(&worker);
    tokio::spawn(responder.run(page, move |reply| {
        replies.handle_message(reply);
    }));

    let url = format!("https://localhost{}?{}", RESOURCE_PATH, resource.to_query());
    println!("Resource: {}", resource);
    println!("Request:  {}", url);

    for attempt in 1..=2 {
        let request = Request::get(&url)?;
        let response = worker
            .handle_fetch(FetchEvent::new(request, DEMO_PAGE))
            .await
            .with_context(|| format!("attempt {}", attempt))?;

        println!("\n=== Attempt {} ===", attempt);
        println!("Status: {}", response.status);
        println!("Content-Type: {}", response.content_type().unwrap_or("-"));
        println!("Size: {} bytes", response.body_len());
    }

    let stats = worker.stats();
    println!("\n=== Stats ===");
    println!("Relays: {}", stats.relays_started);
    println!("Cache hits: {}", stats.cache_hits);
    println!("Cached responses: {}", stats.responses_cached);

    Ok(())
}
