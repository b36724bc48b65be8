mod check_costs;
mod get_cities;
mod method_not_allowed;

use super::*;
