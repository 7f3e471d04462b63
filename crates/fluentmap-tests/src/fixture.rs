use fluentmap::mapped;

///
/// ExampleParentClass
///

#[derive(Debug, Default)]
pub struct ExampleParentClass {
    pub id: u64,
    pub examples: Vec<ExampleClass>,
}

///
/// ExampleClass
///

#[derive(Debug, Default)]
pub struct ExampleClass {
    pub id: u64,
    pub name: String,
    pub parent: Option<Box<ExampleParentClass>>,
}

///
/// ExampleInheritedClass
///
/// Subtype of `ExampleClass` that owns a collection of its base type.
///

#[derive(Debug, Default)]
pub struct ExampleInheritedClass {
    pub base: ExampleClass,
    pub children: Vec<ExampleClass>,
}

mapped!(ExampleParentClass, ExampleClass);
mapped!(ExampleInheritedClass: ExampleClass);

///
/// CustomPersister
///

pub struct CustomPersister;

///
/// SecondCustomPersister
///

pub struct SecondCustomPersister;
