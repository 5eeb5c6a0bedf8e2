use libbucket::backend::ObjectBackend;
use libbucket::backend::localfs::LocalFsBackend;
use libbucket::backend::s3::S3Backend;
use libbucket::client::{DEFAULT_PRESIGN_EXPIRY, ObjectClient};
use libbucket::config::StoreConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => {
            let store = ObjectClient::new(S3Backend::new(StoreConfig::from_env()));
            smoke_test(&store).await;
        }
        Some("demo-local") => {
            let dir = match args.next() {
                Some(p) => p,
                None => {
                    eprintln!("Usage: libbucket demo-local <dir>");
                    std::process::exit(2);
                }
            };
            let store = ObjectClient::new(LocalFsBackend::new(dir));
            // Seed one object so the sequence below has something to hit.
            if !store.upload(b"local demo object", "test_image.jpg").await {
                eprintln!("demo-local: seeding failed");
                std::process::exit(1);
            }
            smoke_test(&store).await;
        }
        Some(_) => {
            println!(
                "Usage:\n  libbucket                    # smoke sequence against S3 (env config)\n  libbucket demo-local <dir>   # same sequence against a local directory"
            );
        }
    }
}

/// List, probe, copy and move a fixed key, printing each outcome.
async fn smoke_test<B: ObjectBackend>(store: &ObjectClient<B>) {
    println!("Listing objects:");
    println!("{:?}", store.list("").await);

    let key = "test_image.jpg";
    let exists = store.exists(key).await;
    println!("Does {key} exist? {}", if exists { "Yes" } else { "No" });

    if store.copy(key, "copy_of_test_image.jpg").await {
        println!("Object copied.");
    }

    if store
        .move_object("copy_of_test_image.jpg", "moved_image.jpg")
        .await
    {
        println!("Object moved.");
    }

    if let Some(url) = store
        .presigned_url("moved_image.jpg", DEFAULT_PRESIGN_EXPIRY)
        .await
    {
        println!("Read URL: {url}");
    }
}
