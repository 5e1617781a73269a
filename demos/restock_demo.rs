//! Demonstration of the greedy restock planner on a small home bar.

use mixbook::algorithms::{GreedyPlanner, RestockAlgorithm};
use mixbook::model::{Glassware, Ice, Ingredient, IngredientType, Spec};
use mixbook::store::{Bar, Dex, Inventory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut inventory = Inventory::new();
    inventory.add(
        Ingredient::new("London Dry Gin")
            .with_kind(IngredientType::Base, "Gin")
            .with_price(28),
    )?;
    inventory.add(
        Ingredient::new("Campari")
            .with_kind(IngredientType::Modifier, "Amaro / Aperitif / Digestif")
            .with_price(25),
    )?;
    inventory.add(
        Ingredient::new("Sweet Vermouth")
            .with_kind(IngredientType::Modifier, "Vermouth")
            .with_price(15)
            .with_restock(true),
    )?;
    inventory.add(
        Ingredient::new("White Rum")
            .with_kind(IngredientType::Base, "Rum")
            .with_price(18),
    )?;
    inventory.add(Ingredient::new("Lime Juice").with_kind(IngredientType::Juice, ""))?;
    inventory.add(
        Ingredient::new("Simple Syrup")
            .with_kind(IngredientType::Sweetener, "")
            .with_stock(true),
    )?;
    inventory.add(
        Ingredient::new("Soda Water")
            .with_kind(IngredientType::Topper, "")
            .with_stock(true),
    )?;

    let mut dex = Dex::new();
    dex.add(
        Spec::new("Negroni")
            .with_ingredient("1 oz", "London Dry Gin")
            .with_ingredient("1 oz", "Campari")
            .with_ingredient("1 oz", "Sweet Vermouth")
            .with_glassware(Glassware::SingleRocks, Ice::TwoInchCube)
            .with_direction("Stir with ice and strain"),
    )?;
    dex.add(
        Spec::new("Americano")
            .with_ingredient("1.5 oz", "Campari")
            .with_ingredient("1.5 oz", "Sweet Vermouth")
            .with_ingredient("top", "Soda Water")
            .with_glassware(Glassware::Highball, Ice::OneAndOneQuarterInchCubes)
            .with_direction("Build over ice"),
    )?;
    dex.add(
        Spec::new("Daiquiri")
            .with_ingredient("2 oz", "White Rum")
            .with_ingredient("1 oz", "Lime Juice")
            .with_ingredient("0.75 oz", "Simple Syrup")
            .with_glassware(Glassware::Coupe, Ice::None)
            .with_direction("Shake hard and double strain"),
    )?;
    dex.add(
        Spec::new("Gimlet")
            .with_ingredient("2 oz", "London Dry Gin")
            .with_ingredient("0.75 oz", "Lime Juice")
            .with_ingredient("0.75 oz", "Simple Syrup")
            .with_direction("Shake and strain"),
    )?;

    let bar = Bar::new(inventory, dex);
    let snapshot = bar.snapshot();

    println!("Marked for restock (cost {}):", snapshot.flagged_cost());
    for ingredient in snapshot.restock_flagged() {
        println!("  {}", ingredient.name);
    }
    println!();

    let plan = GreedyPlanner::default().plan_flagged(&snapshot);
    if plan.is_empty() {
        println!("Nothing left to unlock.");
        return Ok(());
    }

    let cumulative = plan.cumulative_costs();
    for (i, round) in plan.iter().enumerate() {
        println!("Round {}:", i + 1);
        println!("  Buy:  {}", round.ingredient_names().collect::<Vec<_>>().join(", "));
        println!("  Make: {}", round.spec_names().collect::<Vec<_>>().join(", "));
        println!("  Cost: {}  Cumulative: {}", round.cost(), cumulative[i]);
    }

    Ok(())
}
