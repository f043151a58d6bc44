use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::{Link, Routable};

use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct NavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(NavItem)]
pub fn nav_item(props: &NavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let route = props.route.clone();
    let route_path = format!(
        "nav{}",
        route.to_path().replace("/admin", "").replace('/', ".")
    );
    let route_name = i18n.t(&format!("{route_path}.title"));
    let route_icon = i18n.t(&format!("{route_path}.icon"));

    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{route_icon}"))}></i>
              {route_name}
          </Link<MainRoute>>
      </li>
    }
}
