#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenvy::dotenv().ok();
    let _rocket = superhero_fight::rocket_initialize().launch().await?;
    Ok(())
}
