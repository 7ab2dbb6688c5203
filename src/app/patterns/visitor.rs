use crate::core::{Demo, PatternKind, Result, Transcript};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Circle {
    pub radius: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
}

/// One operation over every shape kind, kept out of the shapes themselves.
pub trait ShapeVisitor {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()>;
    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()>;
}

pub trait Shape: Send + Sync {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) -> Result<()>;
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) -> Result<()> {
        visitor.visit_circle(self)
    }
}

impl Shape for Rectangle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) -> Result<()> {
        visitor.visit_rectangle(self)
    }
}

#[derive(Debug, Default)]
pub struct JsonVisitor {
    pub output: Vec<String>,
}

impl ShapeVisitor for JsonVisitor {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()> {
        self.output.push(serde_json::to_string(circle)?);
        Ok(())
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()> {
        self.output.push(serde_json::to_string(rectangle)?);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct XmlVisitor {
    pub output: Vec<String>,
}

fn xml_element(name: &str, fields: &[(&str, u32)]) -> String {
    let body: String = fields
        .iter()
        .map(|(field, value)| format!("<{field}>{value}</{field}>"))
        .collect();
    format!("<{name}>{body}</{name}>")
}

impl ShapeVisitor for XmlVisitor {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()> {
        self.output
            .push(xml_element("Circle", &[("Radius", circle.radius)]));
        Ok(())
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()> {
        self.output.push(xml_element(
            "Rectangle",
            &[("Width", rectangle.width), ("Height", rectangle.height)],
        ));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct AreaVisitor {
    pub total: f64,
    pub output: Vec<String>,
}

impl ShapeVisitor for AreaVisitor {
    fn visit_circle(&mut self, circle: &Circle) -> Result<()> {
        let area = std::f64::consts::PI * f64::from(circle.radius).powi(2);
        self.total += area;
        self.output.push(format!("Circle area: {:.2}", area));
        Ok(())
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) -> Result<()> {
        let area = f64::from(rectangle.width) * f64::from(rectangle.height);
        self.total += area;
        self.output.push(format!("Rectangle area: {:.2}", area));
        Ok(())
    }
}

pub struct VisitorDemo;

#[async_trait::async_trait]
impl Demo for VisitorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Visitor
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle { radius: 10 }),
            Box::new(Rectangle {
                width: 100,
                height: 200,
            }),
        ];

        // Same shape, different treatments.
        for shape in &shapes {
            let mut json = JsonVisitor::default();
            let mut xml = XmlVisitor::default();
            shape.accept(&mut json)?;
            shape.accept(&mut xml)?;
            transcript.extend(json.output);
            transcript.extend(xml.output);
        }

        let mut area = AreaVisitor::default();
        for shape in &shapes {
            shape.accept(&mut area)?;
        }
        transcript.extend(area.output);
        transcript.line(format!("Total area: {:.2}", area.total));

        Ok(transcript)
    }
}
