//! Restaurant REST API handlers
//!
//! Listings are public. Writes go through the authorization guard; for the
//! menu endpoints the restaurant is loaded first so its owner can be checked,
//! and a missing restaurant only surfaces as 404 to callers the guard admits.

use crate::{
    ApiError, ApiResponse, ApiResult, AppState, Caller, CreateRestaurantRequest, MenuItemDto,
    MenuItemRequest, RestaurantDto, UpdateStatusRequest,
};

use bb_auth::Operation;
use bb_core::{MenuItem, Restaurant};

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/restaurants
///
/// Register a restaurant owned by the caller, in `PENDING` status
pub async fn create_restaurant(
    State(state): State<AppState>,
    caller: Caller,
    payload: Result<Json<CreateRestaurantRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<RestaurantDto>> {
    state.authorize(&caller, Operation::CreateRestaurant, None)?;
    let user = caller.user()?;
    let Json(request) = payload?;

    let restaurant = state
        .restaurants
        .create(request.into_restaurant(user.user_id())?)
        .await?;

    log::info!(
        "User {} registered restaurant {} ('{}')",
        user.user_id(),
        restaurant.id,
        restaurant.name
    );

    Ok(ApiResponse::created(
        "Restaurant created successfully",
        RestaurantDto::new(restaurant, Vec::new()),
    ))
}

/// GET /api/restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<ApiResponse<Vec<RestaurantDto>>> {
    state.authorize(&caller, Operation::ReadListings, None)?;

    let mut restaurants = Vec::new();
    for restaurant in state.restaurants.find_all().await? {
        let menu = state.restaurants.find_menu(restaurant.id).await?;
        restaurants.push(RestaurantDto::new(restaurant, menu));
    }

    Ok(ApiResponse::ok("Restaurants retrieved", restaurants))
}

/// GET /api/restaurants/{id}
pub async fn get_restaurant(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<RestaurantDto>> {
    state.authorize(&caller, Operation::ReadListings, None)?;
    let Path(id) = path?;

    let restaurant = find_restaurant(&state, id).await?;
    let menu = state.restaurants.find_menu(id).await?;

    Ok(ApiResponse::ok(
        "Restaurant retrieved",
        RestaurantDto::new(restaurant, menu),
    ))
}

/// GET /api/restaurants/{id}/menu
pub async fn get_menu(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<Vec<MenuItemDto>>> {
    state.authorize(&caller, Operation::ReadListings, None)?;
    let Path(id) = path?;

    find_restaurant(&state, id).await?;
    let menu = state.restaurants.find_menu(id).await?;

    Ok(ApiResponse::ok(
        "Menu retrieved",
        menu.into_iter().map(MenuItemDto::from).collect(),
    ))
}

/// POST /api/restaurants/{id}/menu
///
/// Owner of the restaurant (or ADMIN) only
pub async fn add_menu_item(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<MenuItemDto>> {
    let Path(id) = path?;
    let restaurant = state.restaurants.find_by_id(id).await?;
    state.authorize(
        &caller,
        Operation::AddMenuItem,
        restaurant.as_ref().map(|r| r.owner_id),
    )?;
    let restaurant = restaurant.ok_or_else(|| restaurant_not_found(id))?;

    let Json(request) = payload?;
    let update = request.into_update()?;

    let item = state
        .restaurants
        .add_menu_item(MenuItem::new(
            restaurant.id,
            &update.name,
            &update.description,
            update.price,
        ))
        .await?;

    log::info!("Added menu item {} to restaurant {}", item.id, restaurant.id);

    Ok(ApiResponse::ok(
        "Menu item added successfully",
        MenuItemDto::from(item),
    ))
}

/// PUT /api/restaurants/{id}/menu/{item_id}
///
/// Owner of the restaurant (or ADMIN) only
pub async fn update_menu_item(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<MenuItemRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<MenuItemDto>> {
    let Path((id, item_id)) = path?;
    let restaurant = state.restaurants.find_by_id(id).await?;
    state.authorize(
        &caller,
        Operation::UpdateMenuItem,
        restaurant.as_ref().map(|r| r.owner_id),
    )?;
    let restaurant = restaurant.ok_or_else(|| restaurant_not_found(id))?;

    let Json(request) = payload?;
    let update = request.into_update()?;

    let item = state
        .restaurants
        .update_menu_item(restaurant.id, item_id, update)
        .await?;

    log::info!("Updated menu item {} of restaurant {}", item.id, restaurant.id);

    Ok(ApiResponse::ok(
        "Menu item updated successfully",
        MenuItemDto::from(item),
    ))
}

/// PATCH /api/restaurants/{id}/status
///
/// ADMIN only, whoever owns the restaurant
pub async fn change_restaurant_status(
    State(state): State<AppState>,
    caller: Caller,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<RestaurantDto>> {
    state.authorize(&caller, Operation::ChangeRestaurantStatus, None)?;
    let Path(id) = path?;

    let Json(request) = payload?;
    let status = request.into_status()?;

    let restaurant = state.restaurants.update_status(id, status).await?;
    let menu = state.restaurants.find_menu(id).await?;

    log::info!("Restaurant {} is now {}", restaurant.id, restaurant.status);

    Ok(ApiResponse::ok(
        "Restaurant status updated",
        RestaurantDto::new(restaurant, menu),
    ))
}

// =============================================================================
// Helpers
// =============================================================================

async fn find_restaurant(state: &AppState, id: i64) -> ApiResult<Restaurant> {
    state
        .restaurants
        .find_by_id(id)
        .await?
        .ok_or_else(|| restaurant_not_found(id))
}

#[track_caller]
pub(crate) fn restaurant_not_found(id: i64) -> ApiError {
    ApiError::not_found(format!("Restaurant {} not found", id))
}
