#[derive(Debug, PartialEq)]
pub enum ProductServiceError {
    ProductNotFound,
    MissingRequiredFields,
    InvalidPrice,
    ProductCreationFailed,
    ProductUpdateFailed,
    ProductDeletionFailed,
    DatabaseError,
}

impl std::error::Error for ProductServiceError {}

impl std::fmt::Display for ProductServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductServiceError::ProductNotFound => write!(f, "Product not found"),
            ProductServiceError::MissingRequiredFields => {
                write!(f, "Missing required fields: name, category, price, image")
            }
            ProductServiceError::InvalidPrice => {
                write!(f, "Price must be a valid non-negative number")
            }
            ProductServiceError::ProductCreationFailed => write!(f, "Product creation failed"),
            ProductServiceError::ProductUpdateFailed => write!(f, "Product update failed"),
            ProductServiceError::ProductDeletionFailed => write!(f, "Product deletion failed"),
            ProductServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum OrderServiceError {
    OrderNotFound,
    EmptyOrder,
    InvalidItem,
    InvalidTotal,
    InvalidStatus,
    OrderCreationFailed,
    OrderUpdateFailed,
    DatabaseError,
}

impl std::error::Error for OrderServiceError {}

impl std::fmt::Display for OrderServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderServiceError::OrderNotFound => write!(f, "Order not found"),
            OrderServiceError::EmptyOrder => write!(f, "Order must contain at least one item"),
            OrderServiceError::InvalidItem => {
                write!(f, "Order items must have a valid price and quantity")
            }
            OrderServiceError::InvalidTotal => {
                write!(f, "Order total must be a valid non-negative number")
            }
            OrderServiceError::InvalidStatus => write!(f, "Invalid order status"),
            OrderServiceError::OrderCreationFailed => write!(f, "Order creation failed"),
            OrderServiceError::OrderUpdateFailed => write!(f, "Order update failed"),
            OrderServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SessionServiceError {
    MissingCredentials,
    InvalidCredentials,
    InvalidToken,
    VerificationFailed,
    DatabaseError,
}

impl std::error::Error for SessionServiceError {}

impl std::fmt::Display for SessionServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionServiceError::MissingCredentials => {
                write!(f, "Username and password are required")
            }
            SessionServiceError::InvalidCredentials => write!(f, "Invalid username or password"),
            SessionServiceError::InvalidToken => write!(f, "Invalid or expired token"),
            SessionServiceError::VerificationFailed => write!(f, "Password verification failed"),
            SessionServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CategoryServiceError {
    DatabaseError,
}

impl std::error::Error for CategoryServiceError {}

impl std::fmt::Display for CategoryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum StatsServiceError {
    DatabaseError,
}

impl std::error::Error for StatsServiceError {}

impl std::fmt::Display for StatsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}
