//! Template renderer — turns route groups into Go registration files.
//!
//! Rendering is plain string building plus `${placeholder}` substitution;
//! template sources live in an explicit [`Templates`] value passed in by the
//! caller, not in ambient state.

use crate::model::RouteGroup;

/// Default content of a generated `<name>_route.go` file.
///
/// Placeholders: `${module}` (manifest module identifier), `${tag}`
/// (registration tag), `${calls}` (one registration call per line).
const ROUTE_FILE: &str = r#"// Code generated by fibergen. DO NOT EDIT.

package routes

import (
	"github.com/gofiber/fiber/v2"

	"${module}/di"
)

func Register${tag}Routes(app fiber.Router, c *di.AppContainer) {
	${tag} := c.${tag}Controller
${calls}}
"#;

/// Default content of a scaffolded controller file. Placeholder: `${name}`.
///
/// The annotation block seeds the route generator: `@Tags` carries the
/// controller's own name so `fibergen routes` picks the example up.
const CONTROLLER_FILE: &str = r#"package controllers

import (
	"github.com/gofiber/fiber/v2"
)

type ${name} struct{}

func New${name}() *${name} {
	return &${name}{}
}

// Example handler
// @Summary      Get Server Info
// @Description  Get server info and dependencies status and uptime of server and more
// @Tags         ${name}
// @Produce      json
// @Success      200 {object} services.ServerInfoResponse
// @Router       /api/v1/${name}/info [get]
func (c *${name}) Example(ctx *fiber.Ctx) error {
	return ctx.SendString("Hello from ${name}")
}
"#;

/// Template sources and naming conventions used by the renderer.
pub struct Templates {
    pub route_file: String,
    pub controller_file: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            route_file: ROUTE_FILE.to_string(),
            controller_file: CONTROLLER_FILE.to_string(),
        }
    }
}

/// Render the registration file for one group.
pub fn render_group(templates: &Templates, group: &RouteGroup, module: &str) -> String {
    let tag = registration_tag(&group.tag);

    let mut calls = String::new();
    for route in &group.routes {
        calls.push_str(&format!(
            "\tapp.{}(\"{}\", {}.{})\n",
            title_case(&route.method),
            route.path,
            tag,
            route.handler
        ));
    }

    templates
        .route_file
        .replace("${module}", module)
        .replace("${tag}", tag)
        .replace("${calls}", &calls)
}

/// Render a scaffolded controller file for `<name>Controller`.
pub fn render_controller(templates: &Templates, controller_name: &str) -> String {
    templates.controller_file.replace("${name}", controller_name)
}

/// Render a skeleton route file from an on-disk template.
pub fn render_skeleton(template: &str, route_name: &str) -> String {
    template.replace("${route}", &capitalize(route_name))
}

/// The identifier the registration function is named after: the raw tag up
/// to a literal "Controller". "ProductController" → "Product". This is the
/// annotation value, not the snake-cased file name.
pub fn registration_tag(tag: &str) -> &str {
    tag.split("Controller").next().unwrap_or(tag)
}

/// Title-case an HTTP verb the way Fiber spells its methods: GET → Get.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteRecord;

    fn group(tag: &str, routes: Vec<(&str, &str, &str)>) -> RouteGroup {
        RouteGroup {
            tag: tag.to_string(),
            clean_name: crate::group::clean_name(tag),
            routes: routes
                .into_iter()
                .map(|(method, path, handler)| RouteRecord {
                    tag: tag.to_string(),
                    method: method.to_string(),
                    path: path.to_string(),
                    handler: handler.to_string(),
                    controller: tag.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn renders_registration_function() {
        let g = group("ProductController", vec![("GET", "/info", "Info")]);
        let out = render_group(&Templates::default(), &g, "example.com/demo");
        assert!(out.contains("package routes"));
        assert!(out.contains("\"example.com/demo/di\""));
        assert!(out.contains("func RegisterProductRoutes(app fiber.Router, c *di.AppContainer) {"));
        assert!(out.contains("\tProduct := c.ProductController"));
        assert!(out.contains("\tapp.Get(\"/info\", Product.Info)"));
    }

    #[test]
    fn call_order_matches_discovery_order() {
        let g = group(
            "ProductController",
            vec![("GET", "/a", "A"), ("POST", "/b", "B"), ("DELETE", "/c", "C")],
        );
        let out = render_group(&Templates::default(), &g, "m");
        let a = out.find("Product.A)").unwrap();
        let b = out.find("Product.B)").unwrap();
        let c = out.find("Product.C)").unwrap();
        assert!(a < b && b < c);
        assert!(out.contains("app.Delete(\"/c\""));
    }

    #[test]
    fn registration_tag_splits_on_controller() {
        assert_eq!(registration_tag("ProductController"), "Product");
        assert_eq!(registration_tag("OrderItem"), "OrderItem");
    }

    #[test]
    fn renders_controller_scaffold() {
        let out = render_controller(&Templates::default(), "OrderController");
        assert!(out.contains("type OrderController struct{}"));
        assert!(out.contains("func NewOrderController() *OrderController {"));
        assert!(out.contains("// @Tags         OrderController"));
        assert!(out.contains("func (c *OrderController) Example(ctx *fiber.Ctx) error {"));
    }

    #[test]
    fn title_cases_verbs() {
        assert_eq!(title_case("GET"), "Get");
        assert_eq!(title_case("delete"), "Delete");
        assert_eq!(title_case(""), "");
    }
}
