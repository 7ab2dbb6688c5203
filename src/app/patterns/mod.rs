pub mod abstract_factory;
pub mod adapter;
pub mod builder;
pub mod chain_of_responsibility;
pub mod decorator;
pub mod facade;
pub mod functional_options;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod prototype;
pub mod proxy;
pub mod service_locator;
pub mod simple_factory;
pub mod singleton;
pub mod specification;
pub mod strategy;
pub mod visitor;

use crate::core::{ConfigProvider, Demo, PatternKind};

/// Builds the demo for `kind`, taking its tunables from `config`.
pub fn demo_for(kind: PatternKind, config: &dyn ConfigProvider) -> Box<dyn Demo> {
    match kind {
        PatternKind::AbstractFactory => Box::new(abstract_factory::AbstractFactoryDemo),
        PatternKind::Adapter => Box::new(adapter::AdapterDemo),
        PatternKind::Builder => Box::new(builder::BuilderDemo),
        PatternKind::ChainOfResponsibility => {
            Box::new(chain_of_responsibility::ChainOfResponsibilityDemo)
        }
        PatternKind::Decorator => Box::new(decorator::DecoratorDemo),
        PatternKind::Facade => Box::new(facade::FacadeDemo),
        PatternKind::FunctionalOptions => Box::new(functional_options::FunctionalOptionsDemo),
        PatternKind::Mediator => Box::new(mediator::MediatorDemo),
        PatternKind::Memento => Box::new(memento::MementoDemo),
        PatternKind::Observer => Box::new(observer::ObserverDemo),
        PatternKind::Prototype => Box::new(prototype::PrototypeDemo),
        PatternKind::Proxy => Box::new(proxy::ProxyDemo::new(config.max_allowed_requests())),
        PatternKind::ServiceLocator => Box::new(service_locator::ServiceLocatorDemo),
        PatternKind::SimpleFactory => Box::new(simple_factory::SimpleFactoryDemo),
        PatternKind::Singleton => {
            Box::new(singleton::SingletonDemo::new(config.concurrent_callers()))
        }
        PatternKind::Specification => Box::new(specification::SpecificationDemo),
        PatternKind::Strategy => Box::new(strategy::StrategyDemo),
        PatternKind::Visitor => Box::new(visitor::VisitorDemo),
    }
}
