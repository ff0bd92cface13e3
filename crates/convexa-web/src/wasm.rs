use std::panic;

use convexa::{collision::SimplexVertex, prelude::*};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::common::{
    to_js, OptionalWebQueryConfig, QueryConfig, Tuple2, WebPoint, WebPolygon, WebQueryConfig,
    WebTransform,
};

#[wasm_bindgen(js_name = "setPanicConsoleHook")]
pub fn set_panic_console_hook() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));
}

#[wasm_bindgen(typescript_custom_section)]
const _: &str = include_str!("./type.d.ts");

fn js_error(message: &str) -> JsError {
    JsError::new(message)
}

fn query_error(err: QueryError) -> JsError {
    JsError::new(&err.to_string())
}

fn points(vertices: impl IntoIterator<Item = Point>) -> Vec<Tuple2> {
    vertices.into_iter().map(|point| (&point).into()).collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GjkOutput {
    result: bool,
    reason: &'static str,
    closest_point: Tuple2,
    direction: Tuple2,
    simplex: Vec<Tuple2>,
    support_point: Option<Tuple2>,
}

impl<V: SimplexVertex> From<&GjkResult<V>> for GjkOutput {
    fn from(value: &GjkResult<V>) -> Self {
        GjkOutput {
            result: value.result(),
            reason: value.reason().as_str(),
            closest_point: (&value.closest_point()).into(),
            direction: (&value.direction()).into(),
            simplex: points(value.simplex().positions()),
            support_point: value
                .support_point()
                .as_ref()
                .map(|support_point| (&support_point.position()).into()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PenetrationOutput {
    mtv: Tuple2,
    normal: Tuple2,
    distance: FloatNum,
    contact_a: Tuple2,
    contact_b: Tuple2,
    polytope: Vec<Tuple2>,
}

impl From<&Penetration> for PenetrationOutput {
    fn from(value: &Penetration) -> Self {
        PenetrationOutput {
            mtv: (&value.mtv()).into(),
            normal: (&value.normal()).into(),
            distance: value.distance(),
            contact_a: (&value.contact_a()).into(),
            contact_b: (&value.contact_b()).into(),
            polytope: points(value.polytope().iter().map(|vertex| vertex.to_point())),
        }
    }
}

/// Query entry points sharing one config.
#[wasm_bindgen]
pub struct WebQueryContext {
    context: QueryContext,
}

#[wasm_bindgen]
impl WebQueryContext {
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<OptionalWebQueryConfig>) -> Result<WebQueryContext, JsError> {
        let config: QueryConfig = match config {
            Some(config) => config.try_into().map_err(js_error)?,
            None => QueryConfig::default(),
        };
        Ok(Self {
            context: QueryContext::new(config.to_bind_struct()),
        })
    }

    pub fn config(&self) -> Result<WebQueryConfig, JsError> {
        let config: QueryConfig = self.context.config().into();
        (&config)
            .try_into()
            .map_err(|err: serde_wasm_bindgen::Error| JsError::new(&err.to_string()))
    }

    #[wasm_bindgen(js_name = "closestPointOnConvex")]
    pub fn closest_point_on_convex(
        &self,
        polygon: WebPolygon,
        query: WebPoint,
    ) -> Result<JsValue, JsError> {
        let polygon: Vec<Point> = polygon.try_into().map_err(js_error)?;
        let query: Point = query.try_into().map_err(js_error)?;
        let closest_point = self
            .context
            .closest_point_on_convex(&polygon, &query)
            .map_err(query_error)?;
        to_js(&Tuple2::from(&closest_point))
    }

    #[wasm_bindgen(js_name = "testPointInConvex")]
    pub fn test_point_in_convex(
        &self,
        polygon: WebPolygon,
        query: WebPoint,
        transform: WebTransform,
    ) -> Result<JsValue, JsError> {
        let polygon: Vec<Point> = polygon.try_into().map_err(js_error)?;
        let query: Point = query.try_into().map_err(js_error)?;
        let transform: Transform = transform.try_into().map_err(js_error)?;
        let result = self
            .context
            .test_point_in_convex(&polygon, &query, transform)
            .map_err(query_error)?;
        to_js(&GjkOutput::from(&result))
    }

    #[wasm_bindgen(js_name = "testConvexVsConvex")]
    pub fn test_convex_vs_convex(
        &self,
        a: WebPolygon,
        b: WebPolygon,
        transform_a: WebTransform,
        transform_b: WebTransform,
    ) -> Result<JsValue, JsError> {
        let a: Vec<Point> = a.try_into().map_err(js_error)?;
        let b: Vec<Point> = b.try_into().map_err(js_error)?;
        let transform_a: Transform = transform_a.try_into().map_err(js_error)?;
        let transform_b: Transform = transform_b.try_into().map_err(js_error)?;
        let result = self
            .context
            .test_convex_vs_convex(&a, &b, transform_a, transform_b)
            .map_err(query_error)?;
        to_js(&GjkOutput::from(&result))
    }

    /// Runs the intersection test first, resolves to `null` when the shapes
    /// are apart.
    #[wasm_bindgen(js_name = "resolvePenetration")]
    pub fn resolve_penetration(
        &self,
        a: WebPolygon,
        b: WebPolygon,
        transform_a: WebTransform,
        transform_b: WebTransform,
    ) -> Result<JsValue, JsError> {
        let a: Vec<Point> = a.try_into().map_err(js_error)?;
        let b: Vec<Point> = b.try_into().map_err(js_error)?;
        let transform_a: Transform = transform_a.try_into().map_err(js_error)?;
        let transform_b: Transform = transform_b.try_into().map_err(js_error)?;

        let result = self
            .context
            .test_convex_vs_convex(&a, &b, transform_a, transform_b)
            .map_err(query_error)?;
        if !result.result() {
            return Ok(JsValue::null());
        }

        let penetration = self
            .context
            .resolve_penetration(&a, &b, result.simplex(), transform_a, transform_b)
            .map_err(query_error)?;
        to_js(&PenetrationOutput::from(&penetration))
    }
}

#[wasm_bindgen(js_name = "convexHull")]
pub fn convex_hull(vertices: WebPolygon) -> Result<JsValue, JsError> {
    let vertices: Vec<Point> = vertices.try_into().map_err(js_error)?;
    to_js(&points(convexa::prelude::convex_hull(&vertices)))
}
