use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use dishdecoder_core::{
    analyze, create_provider_from_env, generate_full_recipe, recipe_details, recipe_instructions,
    recipes_by_ingredients, similar_recipes, suggest_meals, take_turn, CatalogClient, DietaryTag,
    LlmProvider, RecipeRecord, ResolvedCandidate, SpoonacularClient, Transcript,
    NO_DIET_MATCHES_MESSAGE, NO_INGREDIENT_MATCHES_MESSAGE,
};

#[derive(Parser)]
#[command(name = "dishdecoder")]
#[command(about = "Dish Decoder - AI meal planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze free-text meal preferences
    Analyze {
        /// Free-text preferences or dietary goals
        text: String,
    },
    /// Suggest meals: analysis, candidate names, and catalog matches
    Suggest {
        /// Free-text preferences or dietary goals
        text: String,
        /// Dietary tags (e.g. vegan, keto); repeatable
        #[arg(long = "diet", value_name = "TAG")]
        diets: Vec<DietaryTag>,
    },
    /// Generate a full recipe (ingredients and instructions)
    Generate {
        /// Free-text preferences or dietary goals
        text: String,
        /// Dietary tags; repeatable
        #[arg(long = "diet", value_name = "TAG")]
        diets: Vec<DietaryTag>,
    },
    /// Search the catalog by diet and intolerances
    Search {
        /// Dietary tags; repeatable
        #[arg(long = "diet", value_name = "TAG")]
        diets: Vec<DietaryTag>,
        /// Intolerances (e.g. gluten, dairy); repeatable
        #[arg(long = "intolerance", value_name = "NAME")]
        intolerances: Vec<String>,
        /// Number of results
        #[arg(short = 'n', long, default_value_t = 5)]
        count: u32,
    },
    /// Search the catalog by ingredients
    Ingredients {
        /// Ingredient names
        #[arg(required = true)]
        items: Vec<String>,
        /// Number of results
        #[arg(short = 'n', long, default_value_t = 5)]
        count: u32,
    },
    /// Look up one recipe by its catalog identifier, with instructions
    /// and similar recipes
    Show {
        /// Recipe identifier
        id: u64,
    },
    /// List the supported dietary tags
    Tags,
    /// Interactive chat session (/reset clears the conversation, /quit exits)
    Chat,
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { text } => {
            let provider = create_provider_from_env()?;
            println!("Analysis: {}", analyze(provider.as_ref(), &text).await);
        }
        Commands::Suggest { text, diets } => {
            let provider = create_provider_from_env()?;
            let catalog = SpoonacularClient::from_env()?;
            suggest(provider.as_ref(), &catalog, &text, diets).await;
        }
        Commands::Generate { text, diets } => {
            let provider = create_provider_from_env()?;
            let tags: BTreeSet<DietaryTag> = diets.into_iter().collect();
            println!(
                "{}",
                generate_full_recipe(provider.as_ref(), &text, &tags).await
            );
        }
        Commands::Search {
            diets,
            intolerances,
            count,
        } => {
            let catalog = SpoonacularClient::from_env()?;
            let tags: BTreeSet<DietaryTag> = diets.into_iter().collect();
            let recipes =
                dishdecoder_core::recipes_for_preferences(&catalog, &tags, &intolerances, count)
                    .await;
            render_recipes(&recipes, NO_DIET_MATCHES_MESSAGE);
        }
        Commands::Ingredients { items, count } => {
            let catalog = SpoonacularClient::from_env()?;
            let recipes = recipes_by_ingredients(&catalog, &items, count).await;
            render_recipes(&recipes, NO_INGREDIENT_MATCHES_MESSAGE);
        }
        Commands::Show { id } => {
            let catalog = SpoonacularClient::from_env()?;
            show(&catalog, id).await;
        }
        Commands::Tags => {
            for tag in DietaryTag::all() {
                println!("{}", tag.label());
            }
        }
        Commands::Chat => {
            let provider = create_provider_from_env()?;
            chat_repl(provider.as_ref()).await?;
        }
    }

    Ok(())
}

async fn suggest(
    provider: &dyn LlmProvider,
    catalog: &dyn CatalogClient,
    text: &str,
    diets: Vec<DietaryTag>,
) {
    let tags: BTreeSet<DietaryTag> = diets.into_iter().collect();
    let plan = suggest_meals(provider, catalog, text, &tags).await;

    println!("Analysis: {}", plan.analysis);
    println!();

    if plan.candidates.is_empty() {
        println!("{}", NO_INGREDIENT_MATCHES_MESSAGE);
        return;
    }

    for candidate in &plan.candidates {
        match candidate {
            ResolvedCandidate::Found(recipe) => render_recipe(recipe),
            ResolvedCandidate::NotFound { name } => {
                println!("{}: details not found", name);
            }
        }
    }
}

async fn show(catalog: &dyn CatalogClient, id: u64) {
    let Some(recipe) = recipe_details(catalog, id).await else {
        println!("Recipe {} not found.", id);
        return;
    };

    render_recipe(&recipe);

    let steps = recipe_instructions(catalog, id).await;
    if !steps.is_empty() {
        println!();
        println!("Instructions:");
        for step in &steps {
            println!("  {}. {}", step.number, step.step);
        }
    }

    let similar = similar_recipes(catalog, id, 3).await;
    if !similar.is_empty() {
        println!();
        println!("Similar recipes:");
        for recipe in &similar {
            println!("  {} ({})", recipe.title, recipe.source_url_or_placeholder());
        }
    }
}

fn render_recipes(recipes: &[RecipeRecord], empty_message: &str) {
    if recipes.is_empty() {
        println!("{}", empty_message);
        return;
    }
    for recipe in recipes {
        render_recipe(recipe);
    }
}

fn render_recipe(recipe: &RecipeRecord) {
    println!("{}", recipe.title);
    println!("  image: {}", recipe.image_or_placeholder());
    println!("  view full recipe: {}", recipe.source_url_or_placeholder());
}

async fn chat_repl(provider: &dyn LlmProvider) -> Result<()> {
    let mut transcript = Transcript::default();

    println!("Dish Decoder chat. /reset clears the conversation, /quit exits.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let message = line.trim();

        match message {
            "" => continue,
            "/quit" => break,
            "/reset" => {
                transcript.reset();
                println!("Conversation reset.");
            }
            _ => {
                let reply = take_turn(provider, &mut transcript, message).await;
                println!("{}", reply);
            }
        }
    }

    Ok(())
}
