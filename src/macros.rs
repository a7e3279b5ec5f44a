//! Declarative command tables.

/// Derive a typed façade from a command table.
///
/// Each `fn` line declares one remote command: its name (sent verbatim),
/// its parameters in order, and its result type. The macro generates:
///
/// - a façade struct generic over the invoker, with one `async fn` per
///   command that builds the [`CommandDescriptor`](crate::CommandDescriptor)
///   and forwards it through [`Facade::call`](crate::Facade::call);
/// - a table function returning a [`CommandTable`](crate::CommandTable)
///   with the [`CommandSpec`](crate::CommandSpec) of every command, used for
///   binding generation.
///
/// Parameter and result types must implement `specta::Type`; parameters
/// must be `Serialize` and results `DeserializeOwned`. The struct implements
/// `Clone` itself, so do not derive it.
///
/// # Example
///
/// ```
/// invoke_facade::facade! {
///     /// Calculator commands.
///     pub struct Calculator => fn calculator_commands;
///
///     /// Adds two numbers.
///     fn add(left: i32, right: i32) -> i32;
///     fn reset() -> ();
/// }
///
/// let table = calculator_commands().unwrap();
/// assert_eq!(table.names(), ["add", "reset"]);
/// assert_eq!(table.commands[0].params.len(), 2);
/// assert_eq!(table.commands[1].params.len(), 0);
/// ```
#[macro_export]
macro_rules! facade {
    (
        $(#[$meta:meta])*
        $vis:vis struct $facade:ident => fn $table:ident;
        $(
            $(#[doc = $doc:literal])*
            fn $name:ident ( $( $param:ident : $pty:ty ),* $(,)? ) -> $ret:ty;
        )*
    ) => {
        $(#[$meta])*
        $vis struct $facade<I: ?Sized> {
            facade: $crate::Facade<I>,
        }

        impl<I: ?Sized> ::std::clone::Clone for $facade<I> {
            fn clone(&self) -> Self {
                Self {
                    facade: ::std::clone::Clone::clone(&self.facade),
                }
            }
        }

        impl<I: $crate::Invoke> $facade<I> {
            /// Create a façade owning `invoker`.
            pub fn new(invoker: I) -> Self {
                Self {
                    facade: $crate::Facade::new(invoker),
                }
            }
        }

        impl<I: $crate::Invoke + ?Sized> $facade<I> {
            /// Create a façade over a shared invoker.
            pub fn from_arc(invoker: ::std::sync::Arc<I>) -> Self {
                Self {
                    facade: $crate::Facade::from_arc(invoker),
                }
            }

            /// The untyped façade underneath.
            pub fn facade(&self) -> &$crate::Facade<I> {
                &self.facade
            }

            $(
                $(#[doc = $doc])*
                pub async fn $name(&self $(, $param: $pty)*) -> $crate::Result<$ret> {
                    let descriptor = $crate::CommandDescriptor::new(stringify!($name))
                        $( .arg(stringify!($param), &$param)? )*;
                    self.facade.call(descriptor).await
                }
            )*
        }

        /// Every command in the table, in declaration order, with the named
        /// types their signatures reach.
        $vis fn $table() -> ::std::result::Result<$crate::CommandTable, $crate::specta::ExportError> {
            let mut types = $crate::specta::TypeDefs::default();
            let commands = ::std::vec![
                $(
                    $crate::CommandSpec::new(
                        stringify!($name),
                        $crate::descriptor::datatype::<$ret>(&mut types)?,
                    )
                    $( .param(stringify!($param), $crate::descriptor::datatype::<$pty>(&mut types)?) )*
                    $( .doc($doc) )*
                ),*
            ];
            ::std::result::Result::Ok($crate::CommandTable::new(commands, types))
        }
    };
}
