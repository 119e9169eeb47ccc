use acceptance_suite::{CredentialsTable, Error, Result};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use crate::world::AcceptanceWorld;

#[given(regex = r"^I am on the Login page$")]
async fn i_am_on_login_page(world: &mut AcceptanceWorld) -> Result<()> {
    let (steps, ctx) = world.login()?;
    steps.open_login_page(ctx).await
}

#[when(regex = r"^I login with the following credentials:$")]
async fn i_login_with_credentials(world: &mut AcceptanceWorld, step: &Step) -> Result<()> {
    let rows = step
        .table
        .as_ref()
        .map(|table| table.rows.as_slice())
        .ok_or_else(|| Error::invalid_table("step needs a | key | value | table"))?;
    let credentials = CredentialsTable::from_rows(rows)?;

    let (steps, ctx) = world.login()?;
    steps.login_with_credentials(ctx, &credentials).await
}

#[then(regex = r"^I should be redirected to the landing page$")]
async fn i_should_be_redirected(world: &mut AcceptanceWorld) -> Result<()> {
    let (steps, ctx) = world.login()?;
    steps.verify_landing_page(ctx).await
}

#[then(regex = r#"^I should see the error message "([^"]*)"$"#)]
async fn i_should_see_error(world: &mut AcceptanceWorld, expected: String) -> Result<()> {
    let (steps, ctx) = world.login()?;
    steps.verify_error_message(ctx, &expected).await
}
