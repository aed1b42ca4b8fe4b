//! XML serialisation of generated POMs.
//!
//! Element order follows what Maven itself writes for a model:
//! `modelVersion`, `groupId`, `artifactId`, `version`, `packaging`, then the
//! dependency section. Inside a dependency `type` is omitted when it is the
//! default `jar`, `classifier` when absent and `exclusions` when empty; each
//! exclusion lists `artifactId` before `groupId`.

use super::{DependencyRecord, Exclusion, Pom, PomKind};
use crate::constants::{
    DEFAULT_DEPENDENCY_TYPE, POM_NAMESPACE, POM_SCHEMA_LOCATION, XML_INDENT, XSI_NAMESPACE,
};
use crate::core::PdepsError;
use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

type XmlWriter = Writer<Vec<u8>>;

impl Pom {
    /// Render the descriptor as an indented XML document.
    pub fn to_xml(&self) -> Result<String> {
        render(self).map_err(|e| {
            PdepsError::XmlError {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn render(pom: &Pom) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', XML_INDENT);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut project = BytesStart::new("project");
    project.push_attribute(("xmlns", POM_NAMESPACE));
    project.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    project.push_attribute(("xsi:schemaLocation", POM_SCHEMA_LOCATION));
    writer.write_event(Event::Start(project))?;

    text_element(&mut writer, "modelVersion", &pom.model_version)?;
    text_element(&mut writer, "groupId", &pom.group_id)?;
    text_element(&mut writer, "artifactId", &pom.artifact_id)?;
    text_element(&mut writer, "version", &pom.version)?;
    text_element(&mut writer, "packaging", &pom.packaging)?;

    match &pom.kind {
        PomKind::Management(dependencies) => {
            start(&mut writer, "dependencyManagement")?;
            write_dependencies(&mut writer, dependencies)?;
            end(&mut writer, "dependencyManagement")?;
        }
        PomKind::Direct(dependencies) => write_dependencies(&mut writer, dependencies)?,
    }

    end(&mut writer, "project")?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_dependencies(writer: &mut XmlWriter, dependencies: &[DependencyRecord]) -> Result<()> {
    if dependencies.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("dependencies")))?;
        return Ok(());
    }

    start(writer, "dependencies")?;
    for dependency in dependencies {
        start(writer, "dependency")?;
        text_element(writer, "groupId", &dependency.group_id)?;
        text_element(writer, "artifactId", &dependency.artifact_id)?;
        text_element(writer, "version", &dependency.version)?;
        if dependency.r#type != DEFAULT_DEPENDENCY_TYPE {
            text_element(writer, "type", &dependency.r#type)?;
        }
        if let Some(classifier) = &dependency.classifier {
            text_element(writer, "classifier", classifier)?;
        }
        text_element(writer, "scope", dependency.scope.as_str())?;
        write_exclusions(writer, &dependency.exclusions)?;
        end(writer, "dependency")?;
    }
    end(writer, "dependencies")
}

fn write_exclusions(writer: &mut XmlWriter, exclusions: &[Exclusion]) -> Result<()> {
    if exclusions.is_empty() {
        return Ok(());
    }

    start(writer, "exclusions")?;
    for exclusion in exclusions {
        start(writer, "exclusion")?;
        text_element(writer, "artifactId", &exclusion.artifact_id)?;
        text_element(writer, "groupId", &exclusion.group_id)?;
        end(writer, "exclusion")?;
    }
    end(writer, "exclusions")
}

fn start(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element(writer: &mut XmlWriter, name: &str, value: &str) -> Result<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    end(writer, name)
}
