use abreport::error::AppResult;

fn main() -> AppResult<()> {
    abreport::entry::run()
}
