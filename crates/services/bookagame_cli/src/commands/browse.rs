// --- File: crates/services/bookagame_cli/src/commands/browse.rs ---
use bookagame_common::models::{Review, VenueQuery};
use bookagame_common::BookingError;

use crate::app_context::AppContext;
use crate::cli::{FavoriteAction, VenueArgs};
use crate::output::print_json;

pub async fn venues(ctx: &AppContext, args: VenueArgs, json: bool) -> Result<(), BookingError> {
    let query = VenueQuery {
        sport_type: args.sport,
        lat: args.lat,
        lng: args.lng,
        radius: args.radius,
        limit: args.limit,
        offset: args.offset,
    };
    let venues = ctx.api.venues(&query).await?;
    if json {
        return print_json(&venues);
    }
    if venues.is_empty() {
        println!("No venues found");
    }
    for venue in &venues {
        let distance = venue
            .distance
            .map(|d| format!("  {:.1} km", d))
            .unwrap_or_default();
        println!(
            "{}  {}  ({})  ★ {:.1} ({})  Rs. {:.0}-{:.0}/hr  {}{}",
            venue.id,
            venue.name,
            venue.address,
            venue.rating,
            venue.review_count,
            venue.min_price,
            venue.max_price,
            venue.sport_types.join(", "),
            distance
        );
    }
    Ok(())
}

pub async fn venue(ctx: &AppContext, id: &str, availability: bool, json: bool) -> Result<(), BookingError> {
    let venue = ctx.api.venue(id).await?;
    let overview = if availability {
        Some(ctx.api.venue_availability(id).await?)
    } else {
        None
    };

    if json {
        let mut value = serde_json::to_value(&venue)?;
        if let (Some(map), Some(overview)) = (value.as_object_mut(), overview) {
            map.insert("availability".to_string(), overview);
        }
        return print_json(&value);
    }

    println!("{}  ★ {:.1} ({} reviews)", venue.name, venue.rating, venue.review_count);
    println!("{}", venue.address);
    if let Some(description) = &venue.description {
        println!("{}", description);
    }
    if !venue.amenities.is_empty() {
        println!("amenities: {}", venue.amenities.join(", "));
    }
    for court in venue.courts.iter().filter(|c| c.is_active) {
        println!("  {}  {}  {}  Rs. {:.0}/hr", court.id, court.name, court.sport_type, court.base_price);
    }
    if let Some(overview) = overview {
        print_json(&overview)?;
    }
    Ok(())
}

pub async fn sports(ctx: &AppContext, json: bool) -> Result<(), BookingError> {
    let sports = ctx.api.sport_types().await?;
    if json {
        return print_json(&sports);
    }
    for sport in sports {
        println!("{}", sport);
    }
    Ok(())
}

fn print_reviews(reviews: &[Review]) {
    if reviews.is_empty() {
        println!("No reviews yet");
    }
    for review in reviews {
        let author = review.user.as_ref().map(|u| u.name.as_str()).unwrap_or("Anonymous");
        println!(
            "{}  {}  {}",
            "★".repeat(usize::from(review.rating.min(5))),
            author,
            review.comment.as_deref().unwrap_or("")
        );
        if let Some(response) = &review.owner_response {
            println!("    owner: {}", response);
        }
    }
}

pub async fn reviews(
    ctx: &AppContext,
    venue_id: Option<String>,
    mine: bool,
    limit: Option<u32>,
    offset: Option<u32>,
    json: bool,
) -> Result<(), BookingError> {
    let reviews = match (venue_id, mine) {
        (_, true) => ctx.api.my_reviews().await?,
        (Some(venue_id), false) => ctx.api.venue_reviews(&venue_id, limit, offset).await?,
        (None, false) => {
            return Err(BookingError::Validation(
                "Pass a venue id or --mine".to_string(),
            ))
        }
    };
    if json {
        return print_json(&reviews);
    }
    print_reviews(&reviews);
    Ok(())
}

pub async fn favorites(ctx: &AppContext, action: FavoriteAction, json: bool) -> Result<(), BookingError> {
    match action {
        FavoriteAction::List => {
            let favorites = ctx.api.favorites().await?;
            if json {
                return print_json(&favorites);
            }
            if favorites.is_empty() {
                println!("No favorites yet");
            }
            for favorite in favorites {
                println!("{}  {}  ({})", favorite.venue_id, favorite.venue.name, favorite.venue.address);
            }
        }
        FavoriteAction::Add { venue_id } => {
            ctx.api.add_favorite(&venue_id).await?;
            println!("Added {} to favorites", venue_id);
        }
        FavoriteAction::Remove { venue_id } => {
            ctx.api.remove_favorite(&venue_id).await?;
            println!("Removed {} from favorites", venue_id);
        }
    }
    Ok(())
}
