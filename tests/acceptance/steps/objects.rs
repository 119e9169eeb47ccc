use acceptance_suite::Result;
use cucumber::{given, then, when};

use crate::world::AcceptanceWorld;

#[given(regex = r"^I create a new object$")]
async fn i_create_a_new_object(world: &mut AcceptanceWorld) -> Result<()> {
    let (steps, ctx) = world.objects()?;
    steps.create_object(ctx).await
}

#[when(regex = r#"^I update the object name to "(.+)"$"#)]
async fn i_update_the_object_name(world: &mut AcceptanceWorld, name: String) -> Result<()> {
    let (steps, ctx) = world.objects()?;
    steps.update_object_name(ctx, &name).await
}

#[then(regex = r"^I delete the object$")]
async fn i_delete_the_object(world: &mut AcceptanceWorld) -> Result<()> {
    let (steps, ctx) = world.objects()?;
    steps.delete_object(ctx).await
}
