use convexa::prelude::*;
use convexa_macro_tools::wasm_config;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Serialize, Deserialize, Clone, Copy, Default)]
pub struct Tuple2 {
    pub x: FloatNum,
    pub y: FloatNum,
}

impl From<&Point> for Tuple2 {
    fn from(value: &Point) -> Self {
        Tuple2 {
            x: value.x(),
            y: value.y(),
        }
    }
}

impl From<Tuple2> for Point {
    fn from(value: Tuple2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<&Vector> for Tuple2 {
    fn from(value: &Vector) -> Self {
        Tuple2 {
            x: value.x(),
            y: value.y(),
        }
    }
}

impl From<Tuple2> for Vector {
    fn from(value: Tuple2) -> Vector {
        (value.x, value.y).into()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "Vector")]
    pub type WebVector;
    #[wasm_bindgen(typescript_type = "Point")]
    pub type WebPoint;
    #[wasm_bindgen(typescript_type = "Point[]")]
    pub type WebPolygon;
    #[wasm_bindgen(typescript_type = "Transform | undefined")]
    pub type WebTransform;
}

impl TryInto<Vector> for WebVector {
    type Error = &'static str;

    fn try_into(self) -> Result<Vector, Self::Error> {
        let value: JsValue = self.into();
        let value: Tuple2 =
            from_value(value).map_err(|_| "vector should be {x:number,y:number}")?;
        Ok(value.into())
    }
}

impl TryInto<Point> for WebPoint {
    type Error = &'static str;

    fn try_into(self) -> Result<Point, Self::Error> {
        let value: JsValue = self.into();
        let value: Tuple2 = from_value(value).map_err(|_| "point should be {x:number,y:number}")?;
        Ok(value.into())
    }
}

impl TryInto<Vec<Point>> for WebPolygon {
    type Error = &'static str;

    fn try_into(self) -> Result<Vec<Point>, Self::Error> {
        let value: JsValue = self.into();
        let vertices: Vec<Tuple2> =
            from_value(value).map_err(|_| "polygon should be {x:number,y:number}[]")?;
        Ok(vertices.into_iter().map(Into::into).collect())
    }
}

#[derive(Deserialize, Default)]
struct TransformInput {
    translation: Option<Tuple2>,
    rotation: Option<FloatNum>,
}

impl TryInto<Transform> for WebTransform {
    type Error = &'static str;

    /// `undefined` is the identity
    fn try_into(self) -> Result<Transform, Self::Error> {
        let value: JsValue = self.into();
        if value.is_undefined() || value.is_null() {
            return Ok(Transform::default());
        }
        let value: TransformInput = from_value(value)
            .map_err(|_| "transform should be {translation?:Vector,rotation?:number}")?;
        Ok(Transform::new(
            value.translation.unwrap_or_default().into(),
            value.rotation.unwrap_or_default(),
        ))
    }
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}

#[wasm_config(bind = QueryConfig)]
pub(crate) struct QueryConfig {
    #[default = 100]
    pub max_closest_point_iterations: usize,
    #[default = 400]
    pub max_gjk_iterations: usize,
    #[default = 100]
    pub max_epa_iterations: usize,
    #[default = 0.001]
    pub epa_tolerance: FloatNum,
    #[default = 1e-9]
    pub epsilon: FloatNum,
}
