#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(chirp_api_migration::Migrator).await;
}
